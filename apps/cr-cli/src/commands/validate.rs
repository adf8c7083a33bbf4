// validate.rs — Run the contact form checks without sending anything.

use super::{validated_submission, FieldArgs};

pub fn execute(args: &FieldArgs) -> anyhow::Result<()> {
    let form = args.read()?;
    let submission = validated_submission(&form)?;
    println!("{}", serde_json::to_string_pretty(&submission.to_json())?);
    eprintln!("Form is valid.");
    Ok(())
}
