use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{HeyArgs, Params, validate};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<HeyArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    HeyArgs::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn validated_params<I, T>(args: I) -> AppResult<Params>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args = parse_test_args(args)?;
    validate(&args).map_err(AppError::from)
}
