//! Distance command - haversine distance between two points.

use glosa::geo::{distance_meters, GeoPoint};

use crate::error::CliError;

/// Arguments for the distance command.
pub struct DistanceArgs {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,
}

/// Run the distance command.
pub fn run(args: DistanceArgs) -> Result<(), CliError> {
    println!("{:.1} m", compute(&args)?);
    Ok(())
}

fn compute(args: &DistanceArgs) -> Result<f64, CliError> {
    let from = GeoPoint::new_checked(args.from_lat, args.from_lng)?;
    let to = GeoPoint::new_checked(args.to_lat, args.to_lng)?;
    Ok(distance_meters(from, to))
}
