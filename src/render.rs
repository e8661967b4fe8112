//! Presentation of a finished party plan, for the terminal or as an HTML page.

use crate::models::{PartyPlan, PlanStep, Track, TrackOutcome, NO_TRACK_NOTICE};
use crate::prompts;
use std::fmt::Write as _;

/// Plain-text report printed after a submission.
pub fn text_report(plan: &PartyPlan) -> String {
    [
        PlanStep::Invitation(&plan.invitation),
        PlanStep::Image(&plan.image_path),
        PlanStep::Track(&plan.track),
    ]
    .iter()
    .map(step_text)
    .collect()
}

/// The slice of the terminal report belonging to one finished step.
pub fn step_text(step: &PlanStep<'_>) -> String {
    let mut out = String::new();

    match step {
        PlanStep::Invitation(invitation) => {
            let _ = writeln!(out, "Your Party Invitation");
            let _ = writeln!(out, "=====================");
            let _ = writeln!(out, "{}", invitation);
            let _ = writeln!(out);
        }
        PlanStep::Image(path) => {
            let _ = writeln!(out, "Generated Party Design: {}", path.display());
        }
        PlanStep::Track(TrackOutcome::NotRequested) => {}
        PlanStep::Track(TrackOutcome::NotFound) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", NO_TRACK_NOTICE);
        }
        PlanStep::Track(TrackOutcome::Found(track)) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Selected Song");
            let _ = writeln!(out, "Track:   {}", track.name);
            let _ = writeln!(out, "Artists: {}", track.artist_names());
            let _ = writeln!(out, "Album:   {}", track.album);
            let _ = writeln!(out, "Open in Spotify: {}", track.external_url);
            let _ = writeln!(out, "Preview: {}", track.embed_url());
        }
    }

    out
}

/// Standalone invitation page. Every interpolated value is HTML-escaped.
pub fn html_page(plan: &PartyPlan) -> String {
    let music = match &plan.track {
        TrackOutcome::NotRequested => String::new(),
        TrackOutcome::NotFound => prompts::render(
            prompts::NO_TRACK_SECTION,
            &[("notice", &escape_html(NO_TRACK_NOTICE))],
        ),
        TrackOutcome::Found(track) => track_section(track),
    };

    let image_src = plan.image_path.to_string_lossy();
    prompts::render(
        prompts::INVITATION_PAGE,
        &[
            ("occasion", &escape_html(plan.request.occasion())),
            ("invitation", &escape_html(&plan.invitation)),
            ("image_src", &escape_html(&image_src)),
            ("music", music.trim_end()),
        ],
    )
}

fn track_section(track: &Track) -> String {
    prompts::render(
        prompts::TRACK_SECTION,
        &[
            ("name", &escape_html(&track.name)),
            ("artists", &escape_html(&track.artist_names())),
            ("album", &escape_html(&track.album)),
            ("external_url", &escape_html(&track.external_url)),
            ("embed_url", &escape_html(&track.embed_url())),
        ],
    )
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
