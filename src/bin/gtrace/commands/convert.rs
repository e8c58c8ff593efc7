use crate::cli;
use anyhow::Result;
use gtrace::core::convert::convert_trace;

pub(crate) fn handle_convert(convert_args: &cli::ConvertArgs) -> Result<()> {
    tracing::debug!("{:?}", convert_args);

    convert_trace(&convert_args.input, &convert_args.output)?;
    Ok(())
}
