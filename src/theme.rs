//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the dashboard UI.
//! Modify values here to change the application's color scheme.

use bevy_egui::egui::Color32;

// ============================================================================
// Dashboard Surface
// ============================================================================

/// Dashboard background behind the card grid
pub const DASHBOARD_BACKGROUND: Color32 = Color32::from_rgb(24, 26, 31);

/// Base fill for card tiles
pub const CARD_FILL: Color32 = Color32::from_rgb(38, 41, 48);

/// Card title text
pub const CARD_TITLE: Color32 = Color32::from_rgb(230, 232, 235);

/// Secondary card text (kind label, footprint readout)
pub const CARD_SUBTLE: Color32 = Color32::from_rgb(140, 145, 155);

// ============================================================================
// Card Accents
// ============================================================================

/// Lights and switches
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(255, 196, 84);

/// Climate and temperature
pub const ACCENT_CLIMATE: Color32 = Color32::from_rgb(94, 177, 255);

/// Media players
pub const ACCENT_MEDIA: Color32 = Color32::from_rgb(186, 128, 255);

/// Cameras
pub const ACCENT_CAMERA: Color32 = Color32::from_rgb(120, 220, 160);

/// Calendar and todo
pub const ACCENT_SCHEDULE: Color32 = Color32::from_rgb(255, 140, 120);

/// Vacuum robots
pub const ACCENT_VACUUM: Color32 = Color32::from_rgb(110, 200, 210);

/// Energy pricing and meters
pub const ACCENT_ENERGY: Color32 = Color32::from_rgb(170, 220, 90);

/// Generic sensors
pub const ACCENT_SENSOR: Color32 = Color32::from_rgb(160, 165, 175);
