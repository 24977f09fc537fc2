use hashbrown::HashMap;

use crate::*;

/// Per-session store of built grids. Grids are a pure function of [`LevelKey`], so key equality is
/// the only invalidation needed.
#[derive(Clone, Debug, Default)]
pub struct GridCache {
    config: LayoutConfig,
    grids: HashMap<LevelKey, LayoutOutcome>,
}

impl GridCache {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            grids: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Returns the cached grid for `level`, building it on first use.
    pub fn get_or_build(&mut self, level: &Level) -> &LayoutOutcome {
        let config = self.config;
        self.grids.entry(level.key()).or_insert_with(|| {
            log::debug!(
                "Building grid for level with {} solutions",
                level.solutions().len()
            );
            level.build_grid(&config)
        })
    }

    pub fn get(&self, level: &Level) -> Option<&LayoutOutcome> {
        self.grids.get(&level.key())
    }

    /// Drops the grid of a level the player has left.
    pub fn evict(&mut self, level: &Level) -> Option<LayoutOutcome> {
        self.grids.remove(&level.key())
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn clear(&mut self) {
        self.grids.clear();
    }
}
