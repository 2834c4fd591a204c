use crate::core::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Highest zoom level any supported tile source serves
pub const MAX_SUPPORTED_ZOOM: u8 = 20;

/// Overlay configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Displayed map region
    pub region: MapRegion,
    /// Heading indicator scaling
    pub heading: HeadingProjectionConfig,
    /// Which objects are hidden from the overlay
    pub filter: FilterPolicy,
}

/// Map region the overlay is displayed over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    /// Region name
    pub name: String,
    /// Initial map center
    pub center: GeoPoint,
    /// Magnetic declination added to true bearings (degrees)
    pub magnetic_declination_deg: i32,
    /// Minimum zoom level
    pub min_zoom: u8,
    /// Maximum zoom level
    pub max_zoom: u8,
    /// Zoom level the map opens at
    pub default_zoom: u8,
}

/// Heading indicator length is `base_range_m - zoom * zoom_scale_m`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingProjectionConfig {
    /// Indicator length at zoom 0 (meters)
    pub base_range_m: f64,
    /// Length removed per zoom level (meters)
    pub zoom_scale_m: f64,
}

/// Visibility policy applied before rendering and snapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPolicy {
    /// Coalition the viewer belongs to; its own bullseye is hidden
    pub home_coalition: String,
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("Invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    #[error("I/O error: {message}")]
    IoError { message: String },
    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn into_result(self) -> ConfigResult<()> {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            region: MapRegion::syria(),
            heading: HeadingProjectionConfig::default(),
            filter: FilterPolicy::default(),
        }
    }
}

impl MapRegion {
    /// Syria theatre
    pub fn syria() -> Self {
        Self {
            name: "Syria".to_string(),
            center: GeoPoint::new(35.021, 35.9),
            magnetic_declination_deg: 5,
            min_zoom: 8,
            max_zoom: 12,
            default_zoom: 9,
        }
    }
}

impl Default for HeadingProjectionConfig {
    fn default() -> Self {
        Self {
            base_range_m: 30000.0,
            zoom_scale_m: 2000.0,
        }
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            home_coalition: "Allies".to_string(),
        }
    }
}

/// Main configuration manager
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    /// Current overlay configuration
    config: OverlayConfig,
    /// Configuration file path
    config_file_path: Option<String>,
    /// Whether configuration has been modified
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    /// Get current configuration
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the configuration after validation
    pub fn update_config(&mut self, config: OverlayConfig) -> ConfigResult<()> {
        Self::validate_config(&config).into_result()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: OverlayConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        Self::validate_config(&config).into_result()?;

        tracing::debug!(path = %path_str, region = %config.region.name, "loaded overlay config");
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = self.to_json()?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> ConfigResult<()> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::IoError {
                message: "No file path set for saving configuration".to_string(),
            }),
        }
    }

    /// Pretty-printed JSON of the current configuration
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update the magnetic declination, returning the previous value
    pub fn set_magnetic_declination(&mut self, declination_deg: i32) -> ConfigResult<i32> {
        if !(-180..=180).contains(&declination_deg) {
            return Err(ConfigError::InvalidParameter {
                parameter: "magnetic_declination_deg".to_string(),
                value: declination_deg.to_string(),
                reason: "Declination must be between -180 and 180 degrees".to_string(),
            });
        }

        let old_value = self.config.region.magnetic_declination_deg;
        self.config.region.magnetic_declination_deg = declination_deg;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update the viewer's home coalition, returning the previous value
    pub fn set_home_coalition(&mut self, coalition: impl Into<String>) -> String {
        self.is_modified = true;
        std::mem::replace(&mut self.config.filter.home_coalition, coalition.into())
    }

    /// Update the zoom bounds, pulling the default zoom inside them
    pub fn set_zoom_bounds(&mut self, min_zoom: u8, max_zoom: u8) -> ConfigResult<()> {
        if min_zoom > max_zoom || max_zoom > MAX_SUPPORTED_ZOOM {
            return Err(ConfigError::InvalidParameter {
                parameter: "zoom_bounds".to_string(),
                value: format!("{}..{}", min_zoom, max_zoom),
                reason: format!("Bounds must be ordered and at most {}", MAX_SUPPORTED_ZOOM),
            });
        }

        let region = &mut self.config.region;
        region.min_zoom = min_zoom;
        region.max_zoom = max_zoom;
        region.default_zoom = region.default_zoom.clamp(min_zoom, max_zoom);
        self.is_modified = true;
        Ok(())
    }

    /// Validate a full overlay configuration
    pub fn validate_config(config: &OverlayConfig) -> ValidationResult {
        let mut result = ValidationResult::default();
        let region = &config.region;

        if region.center.validate().is_err() {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "region.center".to_string(),
                value: format!("{}, {}", region.center.lat, region.center.lon),
                reason: "Center must be a valid WGS84 coordinate".to_string(),
            });
        }

        if !(-180..=180).contains(&region.magnetic_declination_deg) {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "region.magnetic_declination_deg".to_string(),
                value: region.magnetic_declination_deg.to_string(),
                reason: "Declination must be between -180 and 180 degrees".to_string(),
            });
        }

        if region.min_zoom > region.max_zoom || region.max_zoom > MAX_SUPPORTED_ZOOM {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "region.zoom".to_string(),
                value: format!("{}..{}", region.min_zoom, region.max_zoom),
                reason: format!("Bounds must be ordered and at most {}", MAX_SUPPORTED_ZOOM),
            });
        } else if !(region.min_zoom..=region.max_zoom).contains(&region.default_zoom) {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "region.default_zoom".to_string(),
                value: region.default_zoom.to_string(),
                reason: "Default zoom must lie within the zoom bounds".to_string(),
            });
        }

        let heading = &config.heading;
        if !(heading.base_range_m.is_finite() && heading.base_range_m > 0.0) {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "heading.base_range_m".to_string(),
                value: heading.base_range_m.to_string(),
                reason: "Base range must be positive".to_string(),
            });
        }
        if !(heading.zoom_scale_m.is_finite() && heading.zoom_scale_m >= 0.0) {
            result.errors.push(ConfigError::InvalidParameter {
                parameter: "heading.zoom_scale_m".to_string(),
                value: heading.zoom_scale_m.to_string(),
                reason: "Zoom scale must not be negative".to_string(),
            });
        } else if heading.base_range_m - f64::from(region.max_zoom) * heading.zoom_scale_m <= 0.0 {
            result.warnings.push(format!(
                "Heading indicators collapse to zero length at zoom {}",
                region.max_zoom
            ));
        }

        if config.filter.home_coalition.is_empty() {
            result
                .warnings
                .push("No home coalition set; every bullseye will be shown".to_string());
        }

        result.is_valid = result.errors.is_empty();
        result
    }
}
