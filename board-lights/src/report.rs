//! Structured report of a run.
//!
//! Printed when no strip is attached, or when asked for. It carries the
//! board as fetched, each placed departure and the final slots, so a
//! surprising strip can be traced back to the rows that lit it.

use std::io::Write;

use serde::Serialize;

use crate::domain::{Crs, RawService};
use crate::indicator::Colour;
use crate::lights::{BoardSummary, ClassifiedService, Severity, Slots};

/// A placed departure as shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportedService {
    pub slot: usize,
    pub severity: Severity,
    pub colour: Colour,
}

impl From<ClassifiedService> for ReportedService {
    fn from(service: ClassifiedService) -> Self {
        Self {
            slot: service.slot,
            severity: service.severity,
            colour: Colour::from(service.severity),
        }
    }
}

/// Everything known about one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub departure_crs: Crs,
    pub destination_crs: Crs,
    pub services: &'a [RawService],
    pub classified: Vec<ReportedService>,
    pub slots: &'a Slots,
}

impl<'a> Report<'a> {
    pub fn new(
        departure_crs: Crs,
        destination_crs: Crs,
        services: &'a [RawService],
        summary: &'a BoardSummary,
    ) -> Self {
        Self {
            departure_crs,
            destination_crs,
            services,
            classified: summary.classified.iter().copied().map(Into::into).collect(),
            slots: &summary.slots,
        }
    }

    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out).map_err(serde_json::Error::io)?;
        Ok(())
    }
}
