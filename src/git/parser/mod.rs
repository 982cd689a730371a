//! git output parser
//!
//! Parses the output from git commands into structured data.

mod branch;
mod name_status;
mod reference;

pub use branch::parse_branch_list;
pub use reference::is_valid_reference;


/// Parser for git command output
pub struct Parser;
