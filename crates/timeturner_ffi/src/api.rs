//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the popup UI.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Responses are plain-data envelopes with stable meaning; the UI decides
//!   how to render them.

use chrono::Local;
use timeturner_core::db::open_db;
use timeturner_core::{
    acknowledge, build_dial_snapshot, core_version as core_version_inner,
    init_logging as init_logging_inner, ping as ping_inner, BirthProfile, ProfileService,
    SaveProfileRequest, SqliteProfileRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const POPUP_DB_FILE_NAME: &str = "timeturner.sqlite3";
static POPUP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for UI smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Acknowledges a message from the extension host background listener.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Any payload is acknowledged; unparseable input is treated as a plain
///   string message.
#[flutter_rust_bridge::frb(sync)]
pub fn host_acknowledge(message_json: String) -> String {
    let value = serde_json::from_str(&message_json)
        .unwrap_or_else(|_| serde_json::Value::String(message_json));
    acknowledge(&value).status.to_owned()
}

/// Profile fields in wire form for UI display and form prefill.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDto {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH:MM`, 24-hour.
    pub birth_time: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Response envelope for profile reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    /// Whether the read succeeded (a missing profile is still a success).
    pub ok: bool,
    /// `None` when no profile has been captured yet.
    pub profile: Option<ProfileDto>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for profile writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// One evaluated biorhythm cycle for the display panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BiorhythmDto {
    pub name: String,
    pub color: String,
    pub value: f64,
    pub percentage: i32,
    /// `rising`, `falling` or `flat`.
    pub trend: String,
}

/// Render-ready dial state for one frame of the popup.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDto {
    pub zodiac_name: String,
    pub zodiac_symbol: String,
    pub zodiac_index: u32,
    pub zodiac_ring_deg: f64,
    pub daily_ring_deg: f64,
    pub organ_name: String,
    pub organ_function: String,
    pub next_organ_name: String,
    pub organ_minutes_remaining: u32,
    pub biorhythm: Vec<BiorhythmDto>,
    pub hour_hand_deg: f64,
    pub minute_hand_deg: f64,
    pub digital_time: String,
}

/// Response envelope for dial snapshot reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotResponse {
    pub ok: bool,
    /// `None` when no profile is stored; the UI shows the profile form then.
    pub snapshot: Option<SnapshotDto>,
    pub message: String,
}

/// Loads the stored birth profile.
///
/// # FFI contract
/// - Sync call, DB-backed execution, never panics.
/// - `ok=true, profile=None` means "no profile captured yet".
#[flutter_rust_bridge::frb(sync)]
pub fn get_profile() -> ProfileResponse {
    match with_profile_service(|service| service.load_profile()) {
        Ok(Some(profile)) => ProfileResponse {
            ok: true,
            profile: Some(to_profile_dto(&profile)),
            message: "Profile loaded.".to_string(),
        },
        Ok(None) => ProfileResponse {
            ok: true,
            profile: None,
            message: "No profile captured yet.".to_string(),
        },
        Err(err) => ProfileResponse {
            ok: false,
            profile: None,
            message: format!("get_profile failed: {err}"),
        },
    }
}

/// Validates and persists a profile form submission (last-write-wins).
///
/// # FFI contract
/// - Sync call, DB-backed execution, never panics.
/// - Validation failures come back as `ok=false` with the reason in
///   `message`; nothing is written in that case.
#[flutter_rust_bridge::frb(sync)]
pub fn save_profile(
    name: String,
    birth_date: String,
    birth_time: String,
    address: String,
    lat: f64,
    lng: f64,
) -> ActionResponse {
    let request = SaveProfileRequest {
        name,
        birth_date,
        birth_time,
        address,
        lat,
        lng,
    };
    match with_profile_service(|service| service.save_from_form(&request)) {
        Ok(_) => ActionResponse {
            ok: true,
            message: "Profile saved.".to_string(),
        },
        Err(err) => ActionResponse {
            ok: false,
            message: format!("save_profile failed: {err}"),
        },
    }
}

/// Builds the dial snapshot for the stored profile at the current wall clock.
///
/// # FFI contract
/// - Sync call, DB-backed execution, never panics.
/// - `ok=true, snapshot=None` means "no profile captured yet"; the
///   calculators are not invoked in that case.
#[flutter_rust_bridge::frb(sync)]
pub fn dial_snapshot() -> SnapshotResponse {
    let profile = match with_profile_service(|service| service.load_profile()) {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return SnapshotResponse {
                ok: true,
                snapshot: None,
                message: "No profile captured yet.".to_string(),
            };
        }
        Err(err) => {
            return SnapshotResponse {
                ok: false,
                snapshot: None,
                message: format!("dial_snapshot failed: {err}"),
            };
        }
    };

    let snapshot = build_dial_snapshot(&profile, Local::now().naive_local());
    SnapshotResponse {
        ok: true,
        snapshot: Some(to_snapshot_dto(&snapshot)),
        message: "Snapshot ready.".to_string(),
    }
}

fn resolve_popup_db_path() -> PathBuf {
    POPUP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TIMETURNER_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(POPUP_DB_FILE_NAME)
        })
        .clone()
}

fn with_profile_service<T>(
    f: impl FnOnce(&ProfileService<SqliteProfileRepository<'_>>) -> timeturner_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_popup_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("popup DB open failed: {err}"))?;
    let service = ProfileService::new(SqliteProfileRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

fn to_profile_dto(profile: &BirthProfile) -> ProfileDto {
    ProfileDto {
        name: profile.name.clone(),
        birth_date: profile.birth_date.format("%Y-%m-%d").to_string(),
        birth_time: profile.birth_time.format("%H:%M").to_string(),
        address: profile.location.address.clone(),
        lat: profile.location.lat,
        lng: profile.location.lng,
    }
}

fn to_snapshot_dto(snapshot: &timeturner_core::DialSnapshot) -> SnapshotDto {
    SnapshotDto {
        zodiac_name: snapshot.zodiac.name.to_string(),
        zodiac_symbol: snapshot.zodiac.symbol.to_string(),
        zodiac_index: snapshot.zodiac.index as u32,
        zodiac_ring_deg: snapshot.zodiac.ring_rotation_deg,
        daily_ring_deg: snapshot.daily_ring_rotation_deg,
        organ_name: snapshot.organ.organ.name.to_string(),
        organ_function: snapshot.organ.organ.function.to_string(),
        next_organ_name: snapshot.organ.next.name.to_string(),
        organ_minutes_remaining: snapshot.organ.minutes_until_transition,
        biorhythm: snapshot
            .biorhythm
            .iter()
            .map(|reading| BiorhythmDto {
                name: reading.cycle.name.to_string(),
                color: reading.cycle.color.to_string(),
                value: reading.value,
                percentage: reading.percentage,
                trend: trend_label(reading.trend).to_string(),
            })
            .collect(),
        hour_hand_deg: snapshot.hands.hour_deg,
        minute_hand_deg: snapshot.hands.minute_deg,
        digital_time: snapshot.hands.digital.clone(),
    }
}

fn trend_label(trend: timeturner_core::Trend) -> &'static str {
    match trend {
        timeturner_core::Trend::Rising => "rising",
        timeturner_core::Trend::Falling => "falling",
        timeturner_core::Trend::Flat => "flat",
    }
}
