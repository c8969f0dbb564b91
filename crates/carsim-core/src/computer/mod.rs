//! On-Board Computer
//!
//! Trip and total statistics: elapsed and driving time, distance, average
//! speed, fuel consumption by time and by distance, and estimated range.
//!
//! Every action of the car is one simulated second. After the car has updated
//! its speed and burned that second's fuel it calls
//! [`OnBoardComputer::elapse_second`], which advances both periods.

mod display;
mod onboard;
mod report;
mod tally;
mod window;

pub use display::OnBoardComputerDisplay;
pub use onboard::{OnBoardComputer, Period};
pub use report::{PeriodReport, TripReport};
pub use tally::Tally;
pub use window::{ConsumptionWindow, DEFAULT_RANGE_WINDOW_SECS, MAX_RANGE_WINDOW_SECS};
