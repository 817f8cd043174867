pub mod json;
pub mod terminal;

use crate::aggregator::ScanResult;

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}
