// standard library
use std::ops::RangeInclusive;

// crate modules
use crate::vtk::VolumeToVtkBuilder;
use crate::volume::DenseVolume;

// dosekit modules
use dosekit_phantom::{Axis, GridSpec};
use dosekit_utils::f;

// external crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataArray, DataSet, ElementType, Extent,
    IOBuffer, RangeExtent, RectilinearGridPiece, Version, Vtk,
};

/// Convert dense dose volumes to a VTK rectilinear grid
///
/// Grid coordinates are the voxel edges, centred laterally and measured from
/// the surface in depth, matching the profile axes. The flat volume ordering
/// already has `x` varying fastest, which is the VTK cell ordering, so values
/// are copied across without sorting.
///
/// Most useful is the byte ordering, which matters for binary files. ParaView
/// does not care, but Visit only likes big endian, so that is the default.
///
/// ```rust
/// # use dosekit_dose::vtk::VolumeToVtk;
/// # use dosekit_dose::DenseVolume;
/// # use dosekit_phantom::GridSpec;
/// let grid = GridSpec::new([1.0, 1.0, 2.0], [2, 2, 3]).unwrap();
/// let volume = DenseVolume::zeros(grid);
///
/// let vtk = VolumeToVtk::builder().scale(1.0e7).build().convert(&volume);
/// assert_eq!(vtk.title, "Dose 2x2x3");
/// ```
#[derive(Debug, PartialEq)]
pub struct VolumeToVtk {
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
    /// Name of the cell data array
    pub array_name: String,
    /// Scale applied to every value on conversion
    pub scale: f64,
}

// Public API
impl VolumeToVtk {
    /// Start with the default configuration
    pub fn new() -> VolumeToVtk {
        Default::default()
    }

    /// Get an instance of the [VolumeToVtkBuilder]
    pub fn builder() -> VolumeToVtkBuilder {
        VolumeToVtkBuilder::default()
    }

    /// Convert a [DenseVolume] to a vtkio [Vtk] object
    pub fn convert(&self, volume: &DenseVolume) -> Vtk {
        let grid = volume.grid();
        Vtk {
            version: Version::Auto,
            title: f!("Dose {}x{}x{}", grid.nx, grid.ny, grid.nz),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(RectilinearGridPiece {
                extent: Self::extent(grid),
                coords: Self::coordinates(grid),
                data: self.attributes(volume),
            }),
        }
    }
}

impl Default for VolumeToVtk {
    fn default() -> Self {
        VolumeToVtkBuilder::default().build()
    }
}

impl VolumeToVtk {
    /// Number of voxels in each extent
    fn extent(grid: &GridSpec) -> Extent {
        let range_ext: RangeExtent = [
            RangeInclusive::new(0, grid.nx as i32),
            RangeInclusive::new(0, grid.ny as i32),
            RangeInclusive::new(0, grid.nz as i32),
        ];
        Extent::Ranges(range_ext)
    }

    /// Voxel edges along each axis
    fn coordinates(grid: &GridSpec) -> Coordinates {
        Coordinates {
            x: IOBuffer::F64(grid.axis_bounds(Axis::X)),
            y: IOBuffer::F64(grid.axis_bounds(Axis::Y)),
            z: IOBuffer::F64(grid.axis_bounds(Axis::Z)),
        }
    }

    fn attributes(&self, volume: &DenseVolume) -> Attributes {
        let mut attributes = Attributes::new();
        let values = volume.values().iter().map(|v| v * self.scale).collect();

        attributes.cell.push(Attribute::DataArray(DataArray {
            name: self.array_name.clone(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::F64(values),
        }));
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtkio::model::Piece;

    fn volume() -> DenseVolume {
        let grid = GridSpec::new([2.0, 2.0, 1.0], [2, 2, 2]).unwrap();
        DenseVolume::from_values(grid, (0..8).map(f64::from).collect()).unwrap()
    }

    #[test]
    fn builder_defaults() {
        let converter = VolumeToVtk::new();
        assert_eq!(converter.byte_order, ByteOrder::BigEndian);
        assert_eq!(converter.array_name, "dose");
        assert_eq!(converter.scale, 1.0);
    }

    #[test]
    fn rectilinear_grid_from_bounds() {
        let vtk = VolumeToVtk::builder().scale(2.0).build().convert(&volume());

        let DataSet::RectilinearGrid { pieces, .. } = vtk.data else {
            panic!("expected a rectilinear grid");
        };
        let Piece::Inline(piece) = &pieces[0] else {
            panic!("expected inline data");
        };

        assert_eq!(piece.coords.x, IOBuffer::F64(vec![-2.0, 0.0, 2.0]));
        assert_eq!(piece.coords.z, IOBuffer::F64(vec![0.0, 1.0, 2.0]));

        let Attribute::DataArray(array) = &piece.data.cell[0] else {
            panic!("expected a data array");
        };
        assert_eq!(array.name, "dose");
        assert_eq!(
            array.data,
            IOBuffer::F64(vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0])
        );
    }
}
