use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use image::ImageFormat;

use crate::{
    algorithm::GrayscaleAlgorithm, args::Arg, engine::convert_from_path, error::GrayError,
};

/// What a single command-line invocation should do
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertPlan {
    input_file: Option<PathBuf>,
    output_file: PathBuf,
    algorithm: GrayscaleAlgorithm,
    /// Overrides the format guessed from the output extension
    format: Option<ImageFormat>,
}

impl ConvertPlan {
    pub fn new(output_file: PathBuf) -> Self {
        Self {
            input_file: None,
            output_file,
            algorithm: GrayscaleAlgorithm::WeightedAverage,
            format: None,
        }
    }

    pub fn apply_arg(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), GrayError> {
        let arg_string: &'static str = arg.into();
        let Some(value) = value else {
            return Err(GrayError::InvalidArgument(format!(
                "argument requires a value: {arg_string}"
            )));
        };

        match arg {
            Arg::Algorithm => self.algorithm = GrayscaleAlgorithm::try_from(value)?,
            Arg::Format => {
                let format = value
                    .to_str()
                    .and_then(ImageFormat::from_extension)
                    .ok_or_else(|| {
                        GrayError::InvalidArgument(format!(
                            "invalid argument for option `{arg_string}': {}",
                            value.to_string_lossy()
                        ))
                    })?;
                self.format = Some(format);
            }
        };

        Ok(())
    }

    pub fn set_input_file(&mut self, file: PathBuf) -> Result<(), GrayError> {
        if let Some(existing) = &self.input_file {
            return Err(GrayError::InvalidArgument(format!(
                "only one input image is supported, got `{}' and `{}'",
                existing.display(),
                file.display()
            )));
        }
        self.input_file = Some(file);
        Ok(())
    }

    pub fn has_input_file(&self) -> bool {
        self.input_file.is_some()
    }

    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn algorithm(&self) -> GrayscaleAlgorithm {
        self.algorithm
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Converts the input file and writes the results. Returns the paths written.
    ///
    /// Unlike the library entry points, a missing input is an error here:
    /// the user asked for output files and nothing would be written.
    pub fn execute(&self) -> Result<Vec<PathBuf>, GrayError> {
        let Some(input_file) = &self.input_file else {
            return Err(GrayError::InvalidArgument("no images defined".to_owned()));
        };
        crate::init::init();

        let result = convert_from_path(input_file, self.algorithm)?;
        if result.is_empty() {
            return Err(GrayError::InputNotFound(input_file.clone()));
        }
        log::info!(
            "converted {} with {} into {} image(s)",
            input_file.display(),
            self.algorithm,
            result.len()
        );
        result.save(&self.output_file, self.format)
    }
}
