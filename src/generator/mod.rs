//! Renders the Dependabot configuration document from an ecosystem grouping.

pub mod dependabot;

pub use dependabot::{GITHUB_ACTIONS_DIRECTORIES, render_dependabot_config};
