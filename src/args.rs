//! Command-line argument parsing.
//!
//! Options follow the imagemagick convention of a single leading `-`,
//! so they are parsed by hand rather than with an argument parsing library.

use std::ffi::{OsStr, OsString};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{error::GrayError, plan::ConvertPlan};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Arg {
    Algorithm,
    Format,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Algorithm => true,
            Arg::Format => true,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Algorithm => "grayscale algorithm, see below",
            Arg::Format => "output format, e.g. png or jpeg",
        }
    }
}

pub fn parse_args(mut args: Vec<OsString>) -> Result<ConvertPlan, GrayError> {
    if args.len() <= 1 {
        return Err(GrayError::InvalidArgument(
            "No command-line arguments provided".to_owned(),
        ));
    }

    let output_file = args.pop().unwrap_or_default();
    if starts_with_sign(&output_file) {
        return Err(GrayError::InvalidArgument(format!(
            "missing an image filename `{}'",
            output_file.to_string_lossy()
        )));
    }

    let mut plan = ConvertPlan::new(output_file.into());
    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if starts_with_sign(&raw_arg) {
            let string_arg = arg_name(&raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str()).map_err(|_| {
                GrayError::InvalidArgument(format!("unrecognized option `{}'", string_arg))
            })?;
            let value = if arg.needs_value() {
                Some(iter.next().ok_or_else(|| {
                    GrayError::InvalidArgument(format!("argument requires a value: {string_arg}"))
                })?)
            } else {
                None
            };
            plan.apply_arg(arg, value.as_deref())?;
        } else {
            plan.set_input_file(raw_arg.into())?;
        }
    }

    if !plan.has_input_file() {
        return Err(GrayError::InvalidArgument("no images defined".to_owned()));
    }
    Ok(plan)
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    matches!(bytes.first(), Some(&b'-') | Some(&b'+'))
        // Anything starting with two dashes instead of one is treated as filename
        && bytes.get(1) != Some(&b'-')
}

/// Strips the sign off an option
fn arg_name(raw_arg: &OsStr) -> Result<String, GrayError> {
    let string = raw_arg.to_str().ok_or_else(|| {
        GrayError::InvalidArgument(format!(
            "unrecognized option `{}'",
            raw_arg.to_string_lossy()
        ))
    })?;
    Ok(string[1..].to_owned())
}
