use gk_entities::plant::UNKNOWN_PLANT_ID;

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct GardenPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city: String,
    pub zipcode: String,
    pub owner_id: Id,
    pub status: String,
    pub botanist_id: Option<Id>,
}

fn garden_from_payload(id: Id, p: GardenPayload) -> Result<Garden> {
    let GardenPayload {
        latitude,
        longitude,
        address,
        city,
        zipcode,
        owner_id,
        status,
        botanist_id,
    } = p;
    let status = status.parse::<GardenStatus>()?;
    Ok(Garden {
        id,
        latitude,
        longitude,
        address,
        city,
        zipcode,
        owner_id,
        status,
        botanist_id,
    })
}

pub fn create_garden<R: GardenRepo>(repo: &R, p: GardenPayload) -> Result<Garden> {
    let garden = garden_from_payload(Id::new(), p)?;
    repo.create_garden(&garden)?;
    Ok(garden)
}

pub fn update_garden<R: GardenRepo>(repo: &R, id: &Id, p: GardenPayload) -> Result<Garden> {
    let garden = garden_from_payload(repo.get_garden(id)?.id, p)?;
    repo.update_garden(&garden)?;
    Ok(garden)
}

/// Resolve the plant a garden photo was filed under, falling back to the
/// reserved sentinel plant when the submitted reference is unresolvable.
pub fn resolve_sighting_plant<R: PlantRepo>(repo: &R, plant_id: Option<Id>) -> Result<Id> {
    if let Some(id) = plant_id {
        if repo.plant_exists(&id)? {
            return Ok(id);
        }
    }
    Ok(Id::from(UNKNOWN_PLANT_ID))
}

#[cfg(test)]
mod tests {
    use super::{
        super::{store_plant::*, tests::MockDb, *},
        *,
    };

    fn payload(status: &str) -> GardenPayload {
        GardenPayload {
            latitude: 48.85,
            longitude: 2.35,
            address: "1 Rue des Jardins".into(),
            city: "Paris".into(),
            zipcode: "75001".into(),
            owner_id: Id::new(),
            status: status.into(),
            botanist_id: None,
        }
    }

    #[test]
    fn reject_status_outside_domain() {
        let db = MockDb::default();
        for status in ["pending", "", "SEARCH", "guarded"] {
            assert!(matches!(
                create_garden(&db, payload(status)),
                Err(Error::GardenStatus)
            ));
        }
        assert!(db.gardens.borrow().is_empty());

        let garden = create_garden(&db, payload("search")).unwrap();
        assert!(matches!(
            update_garden(&db, &garden.id, payload("lost")),
            Err(Error::GardenStatus)
        ));
        assert_eq!(
            db.get_garden(&garden.id).unwrap().status,
            GardenStatus::Search
        );
    }

    #[test]
    fn accept_both_statuses() {
        let db = MockDb::default();
        assert_eq!(
            create_garden(&db, payload("search")).unwrap().status,
            GardenStatus::Search
        );
        assert_eq!(
            create_garden(&db, payload("guard")).unwrap().status,
            GardenStatus::Guard
        );
    }

    #[test]
    fn unknown_plant_fallback() {
        let db = MockDb::default();
        let plant = create_plant(
            &db,
            PlantPayload {
                name: "Mint".into(),
                ..Default::default()
            },
        )
        .unwrap();

        let resolved = resolve_sighting_plant(&db, Some(plant.id.clone())).unwrap();
        assert_eq!(resolved, plant.id);

        let resolved = resolve_sighting_plant(&db, Some("Unknown".into())).unwrap();
        assert_eq!(resolved.as_str(), UNKNOWN_PLANT_ID);

        let resolved = resolve_sighting_plant(&db, None).unwrap();
        assert_eq!(resolved.as_str(), UNKNOWN_PLANT_ID);
    }
}
