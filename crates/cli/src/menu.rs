//! The fixed numbered menu.

use core::str::FromStr;

use combstock_core::DomainError;

/// Text shown before every prompt for a choice.
pub const MENU: &str = "\n=== Comb Inventory ===\n\
1. Register comb\n\
2. List combs\n\
3. Find comb\n\
4. Update stock\n\
5. Remove comb\n\
0. Exit";

/// One of the fixed menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Find,
    UpdateStock,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Create),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Find),
            "4" => Ok(Self::UpdateStock),
            "5" => Ok(Self::Delete),
            "0" => Ok(Self::Exit),
            other => Err(DomainError::validation(format!(
                "unrecognized option: {other}"
            ))),
        }
    }
}
