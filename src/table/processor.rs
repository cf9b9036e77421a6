use std::io::Write;

use log::{debug, info};

use crate::conf::{Config, LayoutConfig};
use crate::core::CityError;
use crate::table::format::render;
use crate::table::parse::parse_table;
use crate::table::{AnnotatedRow, RawRow, Rows};

/// Largest density across `rows`.
pub fn compute_max_density<'a, I>(rows: I) -> Result<u64, CityError>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter()
        .map(|row| row.density)
        .max()
        .ok_or(CityError::EmptyInput)
}

/// Parses a city table once and derives density percentages from it.
///
/// The maximum density is fixed at construction and is the baseline for every
/// percentage this instance computes, regardless of later annotation or sorting.
/// Mutating operations take `&mut self`, so concurrent callers need their own
/// synchronization.
#[derive(Debug, Clone)]
pub struct CityDataProcessor {
    rows: Rows,
    max_density: u64,
    layout: LayoutConfig,
}

impl CityDataProcessor {
    pub fn new(text: &str) -> Result<Self, CityError> {
        Self::with_config(text, &Config::default())
    }

    pub fn with_config(text: &str, config: &Config) -> Result<Self, CityError> {
        let rows = parse_table(text, &config.input)?;
        let max_density = compute_max_density(&rows)?;
        if max_density == 0 {
            return Err(CityError::InvalidData(
                "maximum density is 0, percentages are undefined".to_string(),
            ));
        }
        debug!("Max density {} over {} rows", max_density, rows.len());

        Ok(Self {
            rows: Rows::Raw(rows),
            max_density,
            layout: config.layout.clone(),
        })
    }

    pub fn max_density(&self) -> u64 {
        self.max_density
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Recomputes the maximum over the current rows. Does not change the stored baseline.
    pub fn compute_max_density(&self) -> Result<u64, CityError> {
        compute_max_density(self.rows.raw())
    }

    pub fn percentage_of(&self, density: u64) -> u32 {
        (density as f64 / self.max_density as f64 * 100.0).round() as u32
    }

    /// Attaches a percentage to every row, keeping row order.
    ///
    /// Rows that already carry a percentage get it recomputed rather than a second one.
    pub fn annotate(&mut self) {
        self.rows = match std::mem::take(&mut self.rows) {
            Rows::Raw(rows) => Rows::Annotated(
                rows.into_iter()
                    .map(|row| AnnotatedRow {
                        percentage: self.percentage_of(row.density),
                        row,
                    })
                    .collect(),
            ),
            Rows::Annotated(mut rows) => {
                for annotated in rows.iter_mut() {
                    annotated.percentage = self.percentage_of(annotated.row.density);
                }
                Rows::Annotated(rows)
            }
        };
    }

    /// Descending by percentage; unannotated rows sort descending by density.
    /// Order among equal keys is unspecified.
    pub fn sort_by_density(&mut self) {
        match &mut self.rows {
            Rows::Raw(rows) => rows.sort_unstable_by(|a, b| b.density.cmp(&a.density)),
            Rows::Annotated(rows) => {
                rows.sort_unstable_by(|a, b| b.percentage.cmp(&a.percentage))
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        render(&self.rows, &self.layout)
    }

    pub fn display<W: Write>(&self, out: &mut W) -> Result<(), CityError> {
        for line in self.render() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn process<W: Write>(&mut self, out: &mut W) -> Result<(), CityError> {
        self.annotate();
        self.sort_by_density();
        self.display(out)?;
        info!(
            "Processed {} rows, max density {}",
            self.rows.len(),
            self.max_density
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::InputConfig;
    use crate::sample::SAMPLE_CSV;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "pipe closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn percentages(processor: &CityDataProcessor) -> Vec<(String, u32)> {
        match processor.rows() {
            Rows::Annotated(rows) => rows
                .iter()
                .map(|a| (a.row.city.clone(), a.percentage))
                .collect(),
            Rows::Raw(_) => panic!("rows are not annotated"),
        }
    }

    #[test]
    fn test_constructor_parses_cities() {
        let processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        assert_eq!(processor.rows().len(), 10);
        assert!(!processor.rows().is_annotated());
        assert_eq!(processor.rows().raw().next().unwrap().city, "Shanghai");
    }

    #[test]
    fn test_max_density() {
        let processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        assert_eq!(processor.max_density(), 13712);
        assert_eq!(processor.compute_max_density(), Ok(13712));
    }

    #[test]
    fn test_percentage_of() {
        let processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        assert_eq!(processor.percentage_of(3826), 28);
        assert_eq!(processor.percentage_of(13712), 100);
        assert_eq!(processor.percentage_of(0), 0);
        assert_eq!(processor.percentage_of(27424), 200);
    }

    #[test]
    fn test_annotate_preserves_order() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        let before: Vec<String> = processor.rows().raw().map(|r| r.city.clone()).collect();
        processor.annotate();
        let after = percentages(&processor);
        assert_eq!(
            after.iter().map(|(c, _)| c.clone()).collect::<Vec<_>>(),
            before
        );
        assert_eq!(after[0], ("Shanghai".to_string(), 28));
        assert_eq!(after[2], ("Lagos".to_string(), 100));
    }

    #[test]
    fn test_annotate_twice_does_not_double_append() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        processor.annotate();
        let once = processor.rows().clone();
        processor.annotate();
        assert_eq!(processor.rows(), &once);
    }

    #[test]
    fn test_sort_by_density() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        processor.annotate();
        processor.sort_by_density();
        let sorted = percentages(&processor);
        assert_eq!(sorted[0], ("Lagos".to_string(), 100));
        assert_eq!(sorted[9], ("Istanbul".to_string(), 19));
        assert!(sorted.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_sort_unannotated_by_density() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        processor.sort_by_density();
        let densities: Vec<u64> = processor.rows().raw().map(|r| r.density).collect();
        assert_eq!(densities[0], 13712);
        assert_eq!(densities[9], 2593);
        assert!(!processor.rows().is_annotated());
    }

    #[test]
    fn test_max_density_fixed_after_sort() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        processor.process(&mut std::io::sink()).unwrap();
        assert_eq!(processor.max_density(), 13712);
        assert_eq!(processor.compute_max_density(), Ok(13712));
    }

    #[test]
    fn test_zero_max_density() {
        let text = "city,population,area,density,country\nA,0,1,0,X";
        assert!(matches!(
            CityDataProcessor::new(text),
            Err(CityError::InvalidData(_))
        ));
    }

    #[test]
    fn test_strict_input_config() {
        let config = Config {
            input: InputConfig::strict(),
            ..Config::default()
        };
        let text = "city,population,area,density,country\nA,1,1,1,X\n\nB,1,1,2,Y";
        assert!(matches!(
            CityDataProcessor::with_config(text, &config),
            Err(CityError::ParseError(_))
        ));
        assert!(CityDataProcessor::new(text).is_ok());
    }

    #[test]
    fn test_free_compute_max_density_empty() {
        let rows: Vec<RawRow> = Vec::new();
        assert_eq!(compute_max_density(&rows), Err(CityError::EmptyInput));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let mut processor = CityDataProcessor::new(SAMPLE_CSV).unwrap();
        assert_eq!(
            processor.process(&mut BrokenPipe),
            Err(CityError::IoError("pipe closed".to_string()))
        );
        assert_eq!(
            processor.display(&mut BrokenPipe),
            Err(CityError::IoError("pipe closed".to_string()))
        );
    }
}
