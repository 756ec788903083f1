//! Water and steam properties from the IAPWS Industrial Formulation
//! 1997 (IF97).
//!
//! The [`Steam`] type is the high-level entry point: it classifies a
//! state from any supported input pair, solves the backward equations
//! where needed and returns the full property surface.  The [`if97`]
//! module exposes the underlying region equations for callers that
//! want them directly.
//!
//! ```
//! use steam97::Steam;
//!
//! let steam = Steam::new();
//! let props = steam.props_pt(3.0, 300.0)?;    // MPa, K
//! assert!((props.enthalpy - 115.33).abs() < 0.01);
//! # Ok::<(), steam97::SteamError>(())
//! ```

pub mod error;
pub mod if97;
pub mod properties;
pub mod steam;

pub use converter::{
    ConductivityUnit, Converter, DensityUnit, EnergyUnit, EntropyUnit, PressUnit, TempUnit,
    UnitSystem, ViscosityUnit,
};
pub use error::{Result, SteamError};
pub use if97::select::Region;
pub use properties::{SaturationPoint, ThermoProps, TransportProps};
pub use steam::Steam;
