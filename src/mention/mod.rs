mod filter;
mod mention_config;
mod navigator;
mod node_kind;
mod path;
mod scanner;
mod session;
mod splice;

pub use filter::{FilterResult, filter, matches_prefix};
pub use mention_config::{DEFAULT_CLOSING_TRIGGER, DEFAULT_TRIGGER, MentionConfig};
pub use navigator::{child_keys, resolve, resolve_str};
pub use node_kind::NodeKind;
pub use path::{ParsedPath, join_path, parse_index, parse_path, split_path};
pub use scanner::{TriggerSpan, clamp_offset, find_span, scan};
pub use session::MentionSession;
pub use splice::{EditResult, accept, accept_with_config, accept_with_suffix, inserted_token};
