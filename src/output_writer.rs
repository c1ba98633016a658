//! Read and write of the JSON file recording deployed contract addresses

use std::{fmt::LowerHex, fs, fs::File, io::Read, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// Read the recorded deployment address for the given contract key, if any
pub fn read_deployment(file_path: &str, key: &str) -> Result<Option<String>, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Ok(None);
    }

    // Parse it's json content into objects
    let parsed_json = get_json_from_file(file_path)?;
    Ok(parsed_json[key]["deploy"].as_str().map(str::to_string))
}

/// Record the deployed address for the given contract key
pub fn record_deployment<T: LowerHex>(
    file_path: &str,
    key: &str,
    address: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;
    }

    // Parse it's json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;
    parsed_json[key]["deploy"] = JsonValue::String(format!("{address:#x}"));

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutputError(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutputError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use alloy::primitives::Address;

    use super::*;

    fn temp_output_file(tag: &str) -> String {
        env::temp_dir()
            .join(format!("deployed-{}-{}.json", tag, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn records_and_reads_back_a_deployment() {
        let file = temp_output_file("roundtrip");
        let address = Address::repeat_byte(0x11);

        record_deployment(&file, "RefundProvider", address).unwrap();
        let recorded = read_deployment(&file, "RefundProvider").unwrap();
        assert_eq!(recorded, Some(format!("{address:#x}")));
    }

    #[test]
    fn missing_file_reads_as_no_deployment() {
        let file = temp_output_file("missing");
        assert_eq!(read_deployment(&file, "RefundProvider").unwrap(), None);
    }

    #[test]
    fn unrelated_key_reads_as_no_deployment() {
        let file = temp_output_file("unrelated");
        record_deployment(&file, "Other", Address::repeat_byte(0x22)).unwrap();
        assert_eq!(read_deployment(&file, "RefundProvider").unwrap(), None);
    }
}
