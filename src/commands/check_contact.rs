//! Check-contact command handler

use anyhow::Result;

use tomerater::is_valid_contact;

pub fn cmd_check_contact(value: &str, json: bool) -> Result<()> {
    let valid = is_valid_contact(value);

    if json {
        let output = serde_json::json!({
            "event": "check-contact",
            "contact": value,
            "valid": valid,
        });
        println!("{}", serde_json::to_string(&output)?);
        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !valid {
        anyhow::bail!(
            "'{}' is not a valid contact: it needs an '@' and must end in .com, .edu, or .org",
            value
        );
    }
    println!("'{}' is a valid contact", value);
    Ok(())
}
