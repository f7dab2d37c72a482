//! Icon pack bundle format for sdpack
//!
//! This crate turns loosely structured source folders into `.sdIconPack`
//! bundles that the Stream Deck application can load.
//!
//! # Source Pack Structure
//!
//! ```text
//! iconpacks/my-pack/
//! ├── iconpack.json              # {"id": "...", "manifest": {"Icon": "logo.png", ...}}
//! ├── logo.png                   # referenced by manifest.Icon
//! └── icons/
//!     ├── play.png
//!     └── media/
//!         └── stop.jpg
//! ```
//!
//! # Bundle Structure
//!
//! ```text
//! packs/<id>.sdIconPack/
//! ├── manifest.json              # the descriptor's manifest object
//! ├── icon.png                   # copy of manifest.Icon, when present
//! ├── icons.json                 # [{"path": "play.png"}, {"path": "media/stop.jpg"}]
//! └── icons/
//!     ├── play.png
//!     └── media/
//!         └── stop.jpg
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sdpack_bundle::Generator;
//! use sdpack_core::PackConfig;
//! use sdpack_logging::TracingSink;
//!
//! let config = PackConfig::default();
//! let sink = TracingSink::new();
//! let generator = Generator::new(&config, &sink);
//!
//! for name in generator.list()? {
//!     generator.generate(&name)?;
//! }
//! # Ok::<(), sdpack_bundle::BundleError>(())
//! ```

mod descriptor;
mod discovery;
mod error;
mod index;
mod validator;

pub mod builder;
pub mod generator;

pub use builder::{BundleBuilder, BundleSummary};
pub use descriptor::{Descriptor, Rejection};
pub use discovery::discover;
pub use error::BundleError;
pub use generator::Generator;
pub use index::{IconEntry, IconIndex, is_icon_file};
pub use validator::Validator;

/// Result type for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;

/// Descriptor file name within a source pack.
pub const DESCRIPTOR_FILE: &str = "iconpack.json";

/// Folder holding icon assets, in both source packs and bundles.
pub const ICONS_DIR: &str = "icons";

/// Manifest file name within the bundle.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Icon index file name within the bundle.
pub const INDEX_FILE: &str = "icons.json";

/// Name the pack's own icon is copied to within the bundle.
pub const ICON_FILE: &str = "icon.png";

/// Manifest field naming the pack's icon file.
pub const ICON_FIELD: &str = "Icon";

/// Printed after a successful generation.
pub const INSTALL_HINT: &str =
    "Use it by copying it to %appdata%/Elgato/StreamDeck/IconPacks (on windows)";
