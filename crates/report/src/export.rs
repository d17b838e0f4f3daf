use std::io::{self, Write};

use crate::{
    comparison::{ComparisonReport, ScenarioReport},
    logging::{ComputationLogEvent, ComputationLogEventKind, ComputationLogWriter},
};

pub const COMPARISON_CSV_HEADER: &str = "scenario,revenue,expenditure,max_limit,prudential_limit,alert_limit,max_margin,prudential_margin,alert_margin,max_occupancy_pct,prudential_occupancy_pct,alert_occupancy_pct\n";

pub struct ComparisonCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> ComparisonCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(COMPARISON_CSV_HEADER.as_bytes())
    }

    pub fn append_scenario(&mut self, scenario: &ScenarioReport) -> io::Result<()> {
        let [max, prudential, alert] = scenario.distances;
        let fields = [
            scenario.state.revenue,
            scenario.state.expenditure,
            scenario.limits.max,
            scenario.limits.prudential,
            scenario.limits.alert,
            max.margin_abs,
            prudential.margin_abs,
            alert.margin_abs,
            scenario.occupancy.max_pct,
            scenario.occupancy.prudential_pct,
            scenario.occupancy.alert_pct,
        ];

        write!(self.writer, "{}", scenario.label.as_str())?;
        for value in fields {
            write!(self.writer, ",{}", csv_number(value))?;
        }
        writeln!(self.writer)
    }

    pub fn write_report(&mut self, report: &ComparisonReport) -> io::Result<()> {
        self.write_header()?;
        for scenario in report.scenarios() {
            self.append_scenario(scenario)?;
        }
        Ok(())
    }

    /// Writes the full table and flushes it before the export is logged.
    pub fn write_report_and_log(
        &mut self,
        evaluation_id: u64,
        report: &ComparisonReport,
        log: &mut dyn ComputationLogWriter,
    ) -> io::Result<()> {
        self.write_report(report)?;
        self.writer.flush()?;
        log.write(ComputationLogEvent::new(
            evaluation_id,
            ComputationLogEventKind::ReportExported,
            None,
        ));
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn comparison_csv(report: &ComparisonReport) -> io::Result<String> {
    let mut writer = ComparisonCsvWriter::new(Vec::new());
    writer.write_report(report)?;
    String::from_utf8(writer.into_inner()).map_err(io::Error::other)
}

// Undefined ratios become empty cells.
fn csv_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
