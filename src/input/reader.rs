use crate::error::MentionError;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read suggestion trees and template text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read a suggestion tree from a file, or from stdin when `path` is None.
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed tree
    /// * `Err(MentionError)` - If the JSON is invalid or an IO error occurs
    pub fn read_json(path: Option<&Path>) -> Result<Value, MentionError> {
        let json_str = Self::read_text(path)?;
        Self::parse_json(&json_str)
    }

    /// Read raw text from a file, or from stdin when `path` is None.
    pub fn read_text(path: Option<&Path>) -> Result<String, MentionError> {
        match path {
            Some(file_path) => Ok(fs::read_to_string(file_path)?),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    pub fn parse_json(json_str: &str) -> Result<Value, MentionError> {
        serde_json::from_str(json_str).map_err(|e| MentionError::InvalidJson(e.to_string()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
