//! JSON output.

use std::io::Write;

use super::{Presenter, Report};
use crate::Result;

/// Renders all reports as one pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render<W: Write>(&self, reports: &[Report], out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, reports)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::tests::sample_report;

    #[test]
    fn test_json_structure() {
        let mut out = Vec::new();
        JsonPresenter.render(&[sample_report()], &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value[0]["title"], "quadrature");
        assert_eq!(value[0]["columns"][1], "trapezoid_error");
        assert_eq!(value[0]["rows"][0][0], 10);
        assert_eq!(value[0]["rows"][0][2], "coarse");
        assert!(value[0]["rows"][1][2].is_null());
    }
}
