// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes shared by every command.
//!
//! Scripts inspect these values, so they must never change:
//!
//! | Name                 | Code |
//! |----------------------|------|
//! | CommandSpecific      | 1    |
//! | ConnectionFailure    | 11   |
//! | APIResponse          | 12   |
//! | ResourceDoesNotExist | 13   |
//! | Generic              | 20   |

use std::fmt;

use serde::ser::SerializeStruct;

/// Reason a command terminated the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Reserved for command specific indications
    CommandSpecific = 1,
    /// Connection to the API endpoint failed
    ConnectionFailure = 11,
    /// Unexpected API response, i.e. authorization failure
    ApiResponse = 12,
    /// The requested resource does not exist
    ResourceDoesNotExist = 13,
    /// Unclassified error
    Generic = 20,
}

/// Returned when an integer is not one of the named exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown exit code: {0}")]
pub struct UnknownExitCode(pub i32);

impl ExitCode {
    /// Every named code, in ascending order.
    pub const ALL: [ExitCode; 5] = [
        ExitCode::CommandSpecific,
        ExitCode::ConnectionFailure,
        ExitCode::ApiResponse,
        ExitCode::ResourceDoesNotExist,
        ExitCode::Generic,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            ExitCode::CommandSpecific => "CommandSpecific",
            ExitCode::ConnectionFailure => "ConnectionFailure",
            ExitCode::ApiResponse => "APIResponse",
            ExitCode::ResourceDoesNotExist => "ResourceDoesNotExist",
            ExitCode::Generic => "Generic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExitCode::CommandSpecific => "reserved for command specific indications",
            ExitCode::ConnectionFailure => "connection to API endpoint failed",
            ExitCode::ApiResponse => "unexpected API response (e.g. authorization failure)",
            ExitCode::ResourceDoesNotExist => "requested resource does not exist",
            ExitCode::Generic => "unclassified error",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.code()
    }
}

impl TryFrom<i32> for ExitCode {
    type Error = UnknownExitCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ExitCode::ALL.into_iter().find(|c| c.code() == value).ok_or(UnknownExitCode(value))
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Serializes as `{"name": ..., "code": ..., "description": ...}` for listings.
impl serde::Serialize for ExitCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut row = serializer.serialize_struct("ExitCode", 3)?;
        row.serialize_field("name", self.name())?;
        row.serialize_field("code", &self.code())?;
        row.serialize_field("description", self.description())?;
        row.end()
    }
}

#[cfg(test)]
#[path = "exit_code_tests.rs"]
mod tests;
