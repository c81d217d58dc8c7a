use hexcell_base::Tolerance;
use hexcell_geometry::{HexGrid, HexRingProfile};
use hexcell_topology::{Compound, Result, SolidBuilder, Vector3};

#[test]
fn grid_of_ring_prisms_packs_into_one_solid() -> Result<()> {
    let grid = HexGrid::new(3, 2, 5.0);
    let tol = Tolerance::default();
    let compound = grid
        .cells()
        .map(|cell| {
            let ring = HexRingProfile::new(cell.center, grid.side, 0.4);
            SolidBuilder::hex_ring_prism(&ring, Vector3::new(1.0, 0.0, 10.0), &tol)
        })
        .collect::<Result<Compound>>()?;

    assert_eq!(compound.len(), 6);
    let solid = compound.to_solid()?;
    assert_eq!(solid.boundaries().len(), 6);
    Ok(())
}
