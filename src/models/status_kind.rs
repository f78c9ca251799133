use serde::Serialize;

/// Machine status kinds as reported by the controller logs.
///
/// The enumeration is closed: any source label that does not match a known
/// kind is mapped to `Other` instead of being rejected, so unrecognized
/// statuses stay visible in every total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StatusKind {
    AutoStart,
    AutoStop,
    Setup,
    Alarm,
    PowerOff,
    Other,
}

impl StatusKind {
    /// Display order used by every report table and legend.
    pub const ALL: [StatusKind; 6] = [
        StatusKind::AutoStart,
        StatusKind::AutoStop,
        StatusKind::Setup,
        StatusKind::Alarm,
        StatusKind::PowerOff,
        StatusKind::Other,
    ];

    /// Convert a source label → kind. Unknown labels become `Other`.
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "電源断" => StatusKind::PowerOff,
            "アラーム" => StatusKind::Alarm,
            "段取り" => StatusKind::Setup,
            "自動起動" => StatusKind::AutoStart,
            "自動停止" => StatusKind::AutoStop,
            _ => StatusKind::Other,
        }
    }

    /// Canonical label, as written by the machine controllers.
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::PowerOff => "電源断",
            StatusKind::Alarm => "アラーム",
            StatusKind::Setup => "段取り",
            StatusKind::AutoStart => "自動起動",
            StatusKind::AutoStop => "自動停止",
            StatusKind::Other => "その他",
        }
    }

    pub fn is_power_off(&self) -> bool {
        matches!(self, StatusKind::PowerOff)
    }
}
