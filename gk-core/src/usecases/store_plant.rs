use std::collections::BTreeMap;

use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct PlantPayload {
    pub name: String,
    pub description: String,
    pub fullname: String,
    pub hint: BTreeMap<String, String>,
    /// On update `None` keeps the stored picture, an empty value removes it.
    pub picture_url: Option<String>,
    /// Tag links, replace-all semantics. `None` leaves existing links untouched.
    pub tags: Option<Vec<Id>>,
}

pub fn create_plant<R: PlantRepo>(repo: &R, p: PlantPayload) -> Result<Plant> {
    if p.name.trim().is_empty() {
        return Err(Error::Name);
    }
    let PlantPayload {
        name,
        description,
        fullname,
        hint,
        picture_url,
        tags,
    } = p;
    let plant = Plant {
        id: Id::new(),
        name,
        description,
        hint: hint.into(),
        fullname,
        picture_url,
    };
    repo.create_plant(&plant)?;
    if let Some(tag_ids) = tags {
        repo.replace_tags_of_plant(&plant.id, &tag_ids)?;
    }
    Ok(plant)
}

pub fn update_plant<R: PlantRepo>(repo: &R, id: &Id, p: PlantPayload) -> Result<Plant> {
    if p.name.trim().is_empty() {
        return Err(Error::Name);
    }
    let old = repo.get_plant(id)?;
    let PlantPayload {
        name,
        description,
        fullname,
        hint,
        picture_url,
        tags,
    } = p;
    let picture_url = match picture_url {
        Some(url) if url.is_empty() => None,
        Some(url) => Some(url),
        None => old.picture_url,
    };
    let plant = Plant {
        id: old.id,
        name,
        description,
        hint: hint.into(),
        fullname,
        picture_url,
    };
    repo.update_plant(&plant)?;
    if let Some(tag_ids) = tags {
        repo.replace_tags_of_plant(&plant.id, &tag_ids)?;
    }
    Ok(plant)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn payload(name: &str, tags: Option<Vec<Id>>) -> PlantPayload {
        PlantPayload {
            name: name.into(),
            description: "a plant".into(),
            fullname: "Planta vulgaris".into(),
            hint: BTreeMap::new(),
            picture_url: None,
            tags,
        }
    }

    #[test]
    fn reject_empty_name() {
        let db = MockDb::default();
        assert!(matches!(create_plant(&db, payload("  ", None)), Err(Error::Name)));
        assert!(db.plants.borrow().is_empty());
    }

    #[test]
    fn replace_all_tag_links() {
        let db = MockDb::default();
        let tag_a = db.add_tag("perennial");
        let tag_b = db.add_tag("edible");
        let tag_c = db.add_tag("shade");

        let plant = create_plant(
            &db,
            payload("Mint", Some(vec![tag_a.clone(), tag_b.clone()])),
        )
        .unwrap();
        let mut linked: Vec<_> = db
            .tags_of_plant(&plant.id)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        linked.sort();
        let mut expected = vec![tag_a.clone(), tag_b.clone()];
        expected.sort();
        assert_eq!(linked, expected);

        // {A, B} -> {B, C}, not {A, B, C}
        update_plant(
            &db,
            &plant.id,
            payload("Mint", Some(vec![tag_b.clone(), tag_c.clone()])),
        )
        .unwrap();
        let mut linked: Vec<_> = db
            .tags_of_plant(&plant.id)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        linked.sort();
        let mut expected = vec![tag_b.clone(), tag_c.clone()];
        expected.sort();
        assert_eq!(linked, expected);
    }

    #[test]
    fn omitted_tag_list_keeps_links() {
        let db = MockDb::default();
        let tag = db.add_tag("perennial");
        let plant = create_plant(&db, payload("Mint", Some(vec![tag.clone()]))).unwrap();
        update_plant(&db, &plant.id, payload("Peppermint", None)).unwrap();
        let linked = db.tags_of_plant(&plant.id).unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, tag);
    }

    #[test]
    fn picture_kept_when_omitted_and_cleared_when_empty() {
        let db = MockDb::default();
        let mut p = payload("Mint", None);
        p.picture_url = Some("/uploads/plant_1.jpg".into());
        let plant = create_plant(&db, p).unwrap();

        let updated = update_plant(&db, &plant.id, payload("Mint", None)).unwrap();
        assert_eq!(updated.picture_url.as_deref(), Some("/uploads/plant_1.jpg"));

        let mut p = payload("Mint", None);
        p.picture_url = Some(String::new());
        let updated = update_plant(&db, &plant.id, p).unwrap();
        assert_eq!(updated.picture_url, None);
    }

    #[test]
    fn hint_round_trip() {
        let db = MockDb::default();
        let mut hint = BTreeMap::new();
        hint.insert("light".to_string(), "Full sun".to_string());
        hint.insert("water".to_string(), "Weekly".to_string());
        hint.insert("temperature".to_string(), "Warm".to_string());
        hint.insert("soil".to_string(), "Loamy".to_string());
        let mut p = payload("Lavender", None);
        p.hint = hint.clone();
        let plant = create_plant(&db, p).unwrap();
        let loaded = db.get_plant(&plant.id).unwrap();
        assert_eq!(BTreeMap::from(loaded.hint), hint);
    }
}
