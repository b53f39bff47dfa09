use chrono_tz::Tz;
use clap::Parser;

use shadow_flip::{
    find_shadow_flip_time_iso, shadow_axis, DegenerateWindow, FlipResult, GeoPoint,
    NotFoundReason, SpaModel, SpaModelConfig,
};

#[derive(Parser, Debug)]
#[command(about = "When does my shadow flip sides?")]
struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, default_value_t = 37.3688, allow_hyphen_values = true, env = "SHADOW_FLIP_LATITUDE")]
    latitude: f64,
    /// Observer longitude in decimal degrees (-180 to 180)
    #[arg(long, default_value_t = -122.0363, allow_hyphen_values = true, env = "SHADOW_FLIP_LONGITUDE")]
    longitude: f64,
    /// Local calendar date, YYYY-MM-DD
    #[arg(long, default_value = "2024-06-28", env = "SHADOW_FLIP_DATE")]
    date: String,
    /// Direction you are facing in degrees (0 = north, clockwise)
    #[arg(long, default_value_t = 90.0, allow_hyphen_values = true, env = "SHADOW_FLIP_HEADING")]
    heading: f64,
    /// IANA time zone the date and result are expressed in
    #[arg(long, default_value = "America/Los_Angeles", env = "SHADOW_FLIP_TIMEZONE")]
    timezone: Tz,
    /// Observer elevation above sea level in meters
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    elevation: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let location = GeoPoint::new(args.latitude, args.longitude)?;
    let model = SpaModel::new(SpaModelConfig {
        elevation_m: args.elevation,
        ..Default::default()
    });
    let (shadow, opposite) = shadow_axis(args.heading);

    println!("=== Shadow Flip ===");
    println!("Location: {:.4}°, {:.4}°", location.latitude, location.longitude);
    println!("Date: {} ({})", args.date, args.timezone);
    println!("Facing: {:.1}°  shadow axis: {:.1}° / {:.1}°", args.heading, shadow, opposite);
    println!();

    match find_shadow_flip_time_iso(&model, location, args.heading, &args.date, args.timezone)? {
        FlipResult::Found(flip) => {
            println!("Shadow flip: {}", flip.format_12h());
            println!("At: {}", flip.instant);
            println!("Sun azimuth: {:.2}° (matched {:.1}°)", flip.azimuth, flip.matched_bearing);
        }
        FlipResult::NotFound(NotFoundReason::NoCrossing) => {
            println!("No shadow flip time found");
        }
        FlipResult::NotFound(NotFoundReason::DegenerateDaylightWindow(window)) => {
            let why = match window {
                DegenerateWindow::PolarDay => "the sun never sets",
                DegenerateWindow::PolarNight => "the sun never rises",
                DegenerateWindow::Inverted => "sunrise and sunset do not fall on this local day",
            };
            println!("No shadow flip time found: {}", why);
        }
    }
    Ok(())
}
