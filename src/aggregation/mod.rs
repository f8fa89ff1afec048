pub mod match_aggregator;
pub mod opponent_group;
