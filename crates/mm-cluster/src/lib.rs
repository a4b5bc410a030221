//! Behavioral cluster profiles and token-overlap mapping of a user onto them.

pub mod mapper;
pub mod profile;

pub use mapper::{map_cluster, user_tokens, ClusterMatch};
pub use profile::{ClusterFeatures, ClusterProfileView, ClusterTable};
