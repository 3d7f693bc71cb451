//! sigreplay - replay a recorded input trace through signatures
//!
//! Feeds each recorded frame to the signatures declared on the command line, running one
//! variable-rate pass and the recorded number of fixed-rate passes, and prints what each
//! signature reports for both phases.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use input_signals::config::{Trace, TuningProfile};
use input_signals::{
    AxisButtonSignature, AxisConsideration, AxisSignature, ButtonSignature, ClickSignature,
    CursorSignature, DualAxisSignature, InputSignature, KeyCode, KeyboardSignature,
    PointerButton, SignalError,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("sigreplay")
        .version(input_signals::VERSION)
        .about("Replay a recorded input trace through input signatures")
        .long_about(
            "sigreplay loads a TOML trace of raw backend frames and prints, for every frame, \
             the state each declared signature reports in the variable-rate and fixed-rate phases.",
        )
        .arg(
            Arg::new("trace")
                .help("Path to the trace file ([[frame]] tables)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tuning")
                .long("tuning")
                .value_name("PROFILE")
                .help("Tuning profile (defaults to the user config profile if present)"),
        )
        .arg(repeated("button", "ID", "Virtual button by id"))
        .arg(repeated(
            "key",
            "KEY",
            "Keyboard key (single character, name or F1..F24)",
        ))
        .arg(repeated("click", "INDEX", "Pointer button by index (0 = left)"))
        .arg(repeated("axis", "ID", "Single analog axis by id"))
        .arg(repeated(
            "axis-button",
            "ID[:positive|negative|absolute]",
            "Analog axis acting as a button",
        ))
        .arg(repeated("dual-axis", "X,Y", "Two axes conditioned as a stick"))
        .arg(
            Arg::new("cursor")
                .long("cursor")
                .action(ArgAction::SetTrue)
                .help("Track the pointer position"),
        )
        .get_matches();

    let trace_path = PathBuf::from(
        matches
            .get_one::<String>("trace")
            .expect("trace argument is required"),
    );

    let profile = match matches.get_one::<String>("tuning") {
        Some(path) => TuningProfile::load(&PathBuf::from(path))
            .with_context(|| format!("loading tuning profile {path}"))?,
        None => TuningProfile::load_or_default()?,
    };

    let mut signatures = build_signatures(&matches, &profile)?;
    if signatures.is_empty() {
        anyhow::bail!(
            "No signatures declared; pass at least one of --button, --key, --click, --axis, \
             --axis-button, --dual-axis, --cursor"
        );
    }

    let trace = Trace::load(&trace_path)
        .with_context(|| format!("loading trace {}", trace_path.display()))?;

    for row in trace.replay(&mut signatures) {
        println!("{row}");
    }

    Ok(())
}

fn repeated(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name(value_name)
        .action(ArgAction::Append)
        .help(help)
}

fn values<'a>(matches: &'a ArgMatches, name: &str) -> impl Iterator<Item = &'a String> {
    matches.get_many::<String>(name).into_iter().flatten()
}

fn build_signatures(
    matches: &ArgMatches,
    profile: &TuningProfile,
) -> input_signals::Result<Vec<Box<dyn InputSignature>>> {
    let mut signatures: Vec<Box<dyn InputSignature>> = Vec::new();

    for id in values(matches, "button") {
        signatures.push(Box::new(ButtonSignature::new(id.as_str(), id.as_str())));
    }

    for raw in values(matches, "key") {
        let key = parse_key(raw)?;
        signatures.push(Box::new(KeyboardSignature::new(format!("key:{raw}"), key)));
    }

    for raw in values(matches, "click") {
        let index: u8 = raw
            .parse()
            .map_err(|_| SignalError::invalid_argument(format!("bad pointer index '{raw}'")))?;
        signatures.push(Box::new(ClickSignature::new(
            format!("click:{index}"),
            PointerButton::from_index(index),
        )));
    }

    for id in values(matches, "axis") {
        let mut axis = AxisSignature::new(id.as_str(), id.as_str());
        profile.axis.apply(&mut axis);
        signatures.push(Box::new(axis));
    }

    for raw in values(matches, "axis-button") {
        let (id, consideration) = parse_axis_button(raw)?;
        let mut button = AxisButtonSignature::new(raw.as_str(), id, AxisConsideration::default());
        profile.axis_button.apply(&mut button, consideration);
        signatures.push(Box::new(button));
    }

    for raw in values(matches, "dual-axis") {
        let (x, y) = parse_dual_axis(raw)?;
        let mut stick = DualAxisSignature::new(raw.as_str(), x, y);
        profile.dual_axis.apply(&mut stick);
        signatures.push(Box::new(stick));
    }

    if matches.get_flag("cursor") {
        signatures.push(Box::new(CursorSignature::new("cursor")));
    }

    Ok(signatures)
}

fn parse_key(raw: &str) -> input_signals::Result<KeyCode> {
    let mut chars = raw.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(ch));
    }

    let lower = raw.to_ascii_lowercase();
    let key = match lower.as_str() {
        "space" => KeyCode::Space,
        "enter" | "return" => KeyCode::Enter,
        "escape" | "esc" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "lshift" => KeyCode::LeftShift,
        "rshift" => KeyCode::RightShift,
        "lctrl" => KeyCode::LeftControl,
        "rctrl" => KeyCode::RightControl,
        "lalt" => KeyCode::LeftAlt,
        "ralt" => KeyCode::RightAlt,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=24).contains(&n) => KeyCode::F(n),
            _ => {
                return Err(SignalError::invalid_argument(format!(
                    "unknown key '{raw}'"
                )))
            }
        },
    };
    Ok(key)
}

fn parse_axis_button(raw: &str) -> input_signals::Result<(&str, Option<AxisConsideration>)> {
    let Some((id, mode)) = raw.split_once(':') else {
        return Ok((raw, None));
    };

    let consideration = match mode {
        "positive" | "+" => AxisConsideration::Positive,
        "negative" | "-" => AxisConsideration::Negative,
        "absolute" | "abs" => AxisConsideration::Absolute,
        other => {
            return Err(SignalError::invalid_argument(format!(
                "unknown axis consideration '{other}'"
            )))
        }
    };
    Ok((id, Some(consideration)))
}

fn parse_dual_axis(raw: &str) -> input_signals::Result<(&str, &str)> {
    match raw.split_once(',') {
        Some((x, y)) if !x.is_empty() && !y.is_empty() => Ok((x, y)),
        _ => Err(SignalError::invalid_argument(format!(
            "expected X,Y axis ids, got '{raw}'"
        ))),
    }
}
