//! Hazard report form
//!
//! Drives one form session from command-line flags: pick the hazard, describe
//! it, attach media, tag the location, submit. Adapter problems (denied
//! permission, media limits, no location) are reported and the session
//! carries on with whatever was collected.

use anyhow::{Context, Result};

use crate::api::ReportsClient;
use crate::capture::{CaptureOutcome, FileCamera, MediaCapture};
use crate::cli::{Format, Output, ReportArgs};
use crate::config::AppConfig;
use crate::error::Error;
use crate::form::ReportForm;
use crate::location::{FixedPosition, Geocoder, LocationAdapter, NoGeocoder, NominatimGeocoder};
use crate::report::{Coordinates, HazardType, MediaKind};
use crate::session::LoginSession;

use super::{load_config, open_store};

pub async fn execute(
    args: ReportArgs,
    custom_config: Option<&str>,
    format: Format,
    output: &Output,
) -> Result<()> {
    let config = load_config(custom_config)?;
    let store = open_store(&config)?;

    if !LoginSession::is_logged_in(&store).await? {
        output.warning("You need to log in before filing a report");
        output.indent("Run 'citizen login' first");
        return Ok(());
    }

    let client = ReportsClient::new(&config.api.base_url, config.api.timeout())?;
    let mut form = ReportForm::new(client);

    output.header("Citizen Report");

    if let Some(hazard) = &args.hazard {
        match hazard.parse::<HazardType>() {
            Ok(hazard) => form.set_hazard_type(hazard),
            Err(e) => {
                output.error(&e.to_string());
                output.indent("Run 'citizen hazards' to see the categories");
                return Ok(());
            }
        }
    }
    if let Some(description) = &args.description {
        form.set_description(description.as_str());
    }

    attach_media(&mut form, &args, &config, output).await;

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        tag_location(&mut form, Coordinates::new(lat, lon), &config, output).await?;
    }

    if args.dry_run {
        match form.payload() {
            Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
            Err(e) => output.alert(e.title(), &e.to_string()),
        }
        return Ok(());
    }

    let spinner = output.spinner("Submitting report...");
    let result = form.submit().await;
    spinner.finish_and_clear();

    match result {
        Ok(submission) => {
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&submission.response)?),
                Format::Text => output.alert("Report Submitted", &submission.summary),
            }
            Ok(())
        }
        Err(e @ Error::Validation(_)) => {
            output.alert(e.title(), &e.to_string());
            Ok(())
        }
        Err(e) => {
            output.error(&e.to_string());
            output.indent("Nothing was lost; run the same command again to retry");
            Err(e).context("Report was not submitted")
        }
    }
}

async fn attach_media(
    form: &mut ReportForm<ReportsClient>,
    args: &ReportArgs,
    config: &AppConfig,
    output: &Output,
) {
    let camera = FileCamera::new(config.permissions.camera)
        .with_images(args.images.iter().cloned())
        .with_videos(args.video.iter().cloned());
    let mut capture = MediaCapture::new(camera);

    for _ in &args.images {
        let result = form.capture_image(&mut capture).await;
        report_capture(MediaKind::Image, result, output);
    }
    if args.video.is_some() {
        let result = form.capture_video(&mut capture).await;
        report_capture(MediaKind::Video, result, output);
    }
}

fn report_capture(kind: MediaKind, result: crate::Result<CaptureOutcome>, output: &Output) {
    match result {
        Ok(CaptureOutcome::Captured(uri)) => output.step(&format!("Attached {}: {}", kind, uri)),
        Ok(CaptureOutcome::Cancelled) => output.warning(&format!("No {} captured", kind)),
        Err(e) => output.alert(e.title(), &e.to_string()),
    }
}

async fn tag_location(
    form: &mut ReportForm<ReportsClient>,
    coords: Coordinates,
    config: &AppConfig,
    output: &Output,
) -> Result<()> {
    let geocoder: Box<dyn Geocoder> = if config.location.reverse_geocode {
        Box::new(NominatimGeocoder::new(
            &config.location.geocoder_url,
            config.api.timeout(),
        )?)
    } else {
        Box::new(NoGeocoder)
    };
    let adapter = LocationAdapter::new(
        FixedPosition::new(config.permissions.location, Some(coords)),
        geocoder,
    );

    match form.acquire_location(&adapter).await {
        Ok(fix) => output.alert(
            "Location Acquired",
            &format!(
                "Coordinates: {}\nAddress: {}",
                fix.coords,
                fix.address.as_deref().unwrap_or("")
            ),
        ),
        Err(e) => output.alert(e.title(), &e.to_string()),
    }
    Ok(())
}
