use crate::common::*;

#[doc = "Function that writes each line followed by a newline, flushing after every line."]
/// # Arguments
/// * `out`   - destination, normally a locked stdout handle
/// * `lines` - lines without trailing newline
///
/// # Returns
/// * Result<(), anyhow::Error>
pub fn write_lines_flushed<W: Write>(out: &mut W, lines: &[String]) -> Result<(), anyhow::Error> {
    for line in lines {
        writeln!(out, "{}", line).context("[io_utils -> write_lines_flushed] write failed")?;
        out.flush()
            .context("[io_utils -> write_lines_flushed] flush failed")?;
    }

    Ok(())
}
