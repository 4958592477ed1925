use pidscan_core::error::PidscanError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PidscanError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
