use bevy::math::Vec2;

use super::spring::{SpringConfig, SpringFollower};

pub const FOLLOWER_COUNT: usize = 3;

/// Where a follower reads its target from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Tracker,
    Follower(usize),
}

/// Dependency list, evaluated top to bottom each frame.
/// Every source precedes its dependent, so one pass settles the whole chain.
pub const LINKS: [Source; FOLLOWER_COUNT] = [
    Source::Tracker,
    Source::Follower(0),
    Source::Follower(1),
];

/// Three springs, each trailing the one before it
#[derive(Debug, Clone, PartialEq)]
pub struct FollowerChain {
    followers: [SpringFollower; FOLLOWER_COUNT],
    spring: SpringConfig,
}

impl FollowerChain {
    /// All followers at rest on `start`
    pub fn new(start: Vec2, spring: SpringConfig) -> Self {
        FollowerChain {
            followers: [SpringFollower::at_rest(start); FOLLOWER_COUNT],
            spring,
        }
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.followers.get(index).map(|f| f.position)
    }

    pub fn source_of(index: usize) -> Option<Source> {
        LINKS.get(index).copied()
    }

    /// Current target of follower `index`, given the tracker position
    pub fn target_of(&self, index: usize, tracker: Vec2) -> Option<Vec2> {
        match Self::source_of(index)? {
            Source::Tracker => Some(tracker),
            Source::Follower(upstream) => self.position(upstream),
        }
    }

    /// Step every follower by `dt` in dependency order
    pub fn advance(&mut self, tracker: Vec2, dt: f32) {
        for index in 0..FOLLOWER_COUNT {
            let Some(target) = self.target_of(index, tracker) else {
                continue;
            };
            if let Some(follower) = self.followers.get_mut(index) {
                follower.step(target, dt, &self.spring);
            }
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.followers.iter().all(SpringFollower::is_at_rest)
    }
}
