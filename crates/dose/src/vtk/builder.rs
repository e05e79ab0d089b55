// crate modules
use crate::vtk::VolumeToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for [VolumeToVtk] configuration
///
/// The fields of [VolumeToVtk] are public for direct use, but chained setters
/// are often easier to read. Call [build()](VolumeToVtkBuilder::build) to get
/// the final converter.
///
/// ```rust
/// # use dosekit_dose::vtk::VolumeToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = VolumeToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .array_name("edep")
///     .build();
///
/// assert_eq!(converter.array_name, "edep");
/// ```
#[derive(Debug)]
pub struct VolumeToVtkBuilder {
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
    /// Name of the cell data array
    array_name: String,
    /// Scale applied to every value on conversion
    scale: f64,
}

impl VolumeToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [VolumeToVtk] type
    pub fn build(self) -> VolumeToVtk {
        VolumeToVtk {
            byte_order: self.byte_order,
            array_name: self.array_name,
            scale: self.scale,
        }
    }

    /// Set the byte ordering
    ///
    /// Visit only reads big endian, which is the default. ParaView reads
    /// either.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Name of the cell data array, `dose` by default
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    /// Multiply every voxel by a constant, e.g. the profile scale
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for VolumeToVtkBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            array_name: "dose".to_string(),
            scale: 1.0,
        }
    }
}
