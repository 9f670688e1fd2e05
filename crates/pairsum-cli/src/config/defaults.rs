use pairsum::core::sequence::SequenceLayout;
use pairsum::search::pair_sum::SearchStrategy;

pub struct DefaultsConfig {
    pub strategy: SearchStrategy,
    pub layout: SequenceLayout,
    pub tree_fill: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Hashed,
            layout: SequenceLayout::Plain,
            tree_fill: "#".to_string(),
        }
    }
}
