use super::*;

impl<'a> PlantRepo for DbReadOnly<'a> {
    fn create_plant(&self, _plant: &Plant) -> Result<()> {
        unreachable!();
    }
    fn update_plant(&self, _plant: &Plant) -> Result<()> {
        unreachable!();
    }
    fn delete_plant(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plant_exists(&self, id: &Id) -> Result<bool> {
        plant_exists(&mut self.conn.borrow_mut(), id)
    }

    fn tags_of_plant(&self, plant_id: &Id) -> Result<Vec<Tag>> {
        tags_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn replace_tags_of_plant(&self, _plant_id: &Id, _tag_ids: &[Id]) -> Result<()> {
        unreachable!();
    }
    fn delete_tags_of_plant(&self, _plant_id: &Id) -> Result<usize> {
        unreachable!();
    }

    fn photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>> {
        photos_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn link_photos_to_plant(&self, _plant_id: &Id, _photo_ids: &[Id]) -> Result<()> {
        unreachable!();
    }
    fn replace_photos_of_plant(&self, _plant_id: &Id, _photo_ids: &[Id]) -> Result<()> {
        unreachable!();
    }
    fn delete_photos_of_plant(&self, _plant_id: &Id) -> Result<Vec<Photo>> {
        unreachable!();
    }
}

impl<'a> PlantRepo for DbReadWrite<'a> {
    fn create_plant(&self, plant: &Plant) -> Result<()> {
        create_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn update_plant(&self, plant: &Plant) -> Result<()> {
        update_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn delete_plant(&self, id: &Id) -> Result<()> {
        delete_plant(&mut self.conn.borrow_mut(), id)
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plant_exists(&self, id: &Id) -> Result<bool> {
        plant_exists(&mut self.conn.borrow_mut(), id)
    }

    fn tags_of_plant(&self, plant_id: &Id) -> Result<Vec<Tag>> {
        tags_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn replace_tags_of_plant(&self, plant_id: &Id, tag_ids: &[Id]) -> Result<()> {
        replace_tags_of_plant(&mut self.conn.borrow_mut(), plant_id, tag_ids)
    }
    fn delete_tags_of_plant(&self, plant_id: &Id) -> Result<usize> {
        delete_tags_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }

    fn photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>> {
        photos_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn link_photos_to_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()> {
        link_photos_to_plant(&mut self.conn.borrow_mut(), plant_id, photo_ids)
    }
    fn replace_photos_of_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()> {
        replace_photos_of_plant(&mut self.conn.borrow_mut(), plant_id, photo_ids)
    }
    fn delete_photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>> {
        delete_photos_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
}

impl<'a> PlantRepo for DbConnection<'a> {
    fn create_plant(&self, plant: &Plant) -> Result<()> {
        create_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn update_plant(&self, plant: &Plant) -> Result<()> {
        update_plant(&mut self.conn.borrow_mut(), plant)
    }
    fn delete_plant(&self, id: &Id) -> Result<()> {
        delete_plant(&mut self.conn.borrow_mut(), id)
    }

    fn get_plant(&self, id: &Id) -> Result<Plant> {
        get_plant(&mut self.conn.borrow_mut(), id)
    }
    fn all_plants(&self) -> Result<Vec<Plant>> {
        all_plants(&mut self.conn.borrow_mut())
    }
    fn plant_exists(&self, id: &Id) -> Result<bool> {
        plant_exists(&mut self.conn.borrow_mut(), id)
    }

    fn tags_of_plant(&self, plant_id: &Id) -> Result<Vec<Tag>> {
        tags_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn replace_tags_of_plant(&self, plant_id: &Id, tag_ids: &[Id]) -> Result<()> {
        replace_tags_of_plant(&mut self.conn.borrow_mut(), plant_id, tag_ids)
    }
    fn delete_tags_of_plant(&self, plant_id: &Id) -> Result<usize> {
        delete_tags_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }

    fn photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>> {
        photos_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
    fn link_photos_to_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()> {
        link_photos_to_plant(&mut self.conn.borrow_mut(), plant_id, photo_ids)
    }
    fn replace_photos_of_plant(&self, plant_id: &Id, photo_ids: &[Id]) -> Result<()> {
        replace_photos_of_plant(&mut self.conn.borrow_mut(), plant_id, photo_ids)
    }
    fn delete_photos_of_plant(&self, plant_id: &Id) -> Result<Vec<Photo>> {
        delete_photos_of_plant(&mut self.conn.borrow_mut(), plant_id)
    }
}

fn create_plant(conn: &mut SqliteConnection, p: &Plant) -> Result<()> {
    let new_plant = models::NewPlant::from(p);
    diesel::insert_into(schema::plants::table)
        .values(&new_plant)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_plant(conn: &mut SqliteConnection, p: &Plant) -> Result<()> {
    use schema::plants::dsl;
    let new_plant = models::NewPlant::from(p);
    let count = diesel::update(dsl::plants.filter(dsl::id.eq(new_plant.id)))
        .set(&new_plant)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_plant(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::plants::dsl;
    let count = diesel::delete(dsl::plants.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_plant(conn: &mut SqliteConnection, id: &Id) -> Result<Plant> {
    use schema::plants::dsl;
    Ok(dsl::plants
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PlantEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_plants(conn: &mut SqliteConnection) -> Result<Vec<Plant>> {
    use schema::plants::dsl;
    Ok(dsl::plants
        .load::<models::PlantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn plant_exists(conn: &mut SqliteConnection, id: &Id) -> Result<bool> {
    use diesel::dsl::{exists, select};
    use schema::plants::dsl;
    select(exists(dsl::plants.filter(dsl::id.eq(id.as_str()))))
        .get_result(conn)
        .map_err(from_diesel_err)
}

fn tags_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<Vec<Tag>> {
    use schema::{plant_tags, tags};
    Ok(plant_tags::table
        .inner_join(tags::table)
        .filter(plant_tags::plant_id.eq(plant_id.as_str()))
        .select(tags::all_columns)
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn replace_tags_of_plant(
    conn: &mut SqliteConnection,
    plant_id: &Id,
    tag_ids: &[Id],
) -> Result<()> {
    delete_tags_of_plant(conn, plant_id)?;
    let new_links: Vec<_> = tag_ids
        .iter()
        .map(|tag_id| models::NewPlantTag {
            plant_id: plant_id.as_str(),
            tag_id: tag_id.as_str(),
        })
        .collect();
    diesel::insert_into(schema::plant_tags::table)
        .values(&new_links)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_tags_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<usize> {
    use schema::plant_tags::dsl;
    diesel::delete(dsl::plant_tags.filter(dsl::plant_id.eq(plant_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn photos_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<Vec<Photo>> {
    use schema::{photos, plant_photos};
    Ok(plant_photos::table
        .inner_join(photos::table)
        .filter(plant_photos::plant_id.eq(plant_id.as_str()))
        .select(photos::all_columns)
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn link_photos_to_plant(
    conn: &mut SqliteConnection,
    plant_id: &Id,
    photo_ids: &[Id],
) -> Result<()> {
    let new_links: Vec<_> = photo_ids
        .iter()
        .map(|photo_id| models::NewPlantPhoto {
            plant_id: plant_id.as_str(),
            photo_id: photo_id.as_str(),
        })
        .collect();
    diesel::insert_into(schema::plant_photos::table)
        .values(&new_links)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn replace_photos_of_plant(
    conn: &mut SqliteConnection,
    plant_id: &Id,
    photo_ids: &[Id],
) -> Result<()> {
    use schema::plant_photos::dsl;
    diesel::delete(dsl::plant_photos.filter(dsl::plant_id.eq(plant_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    link_photos_to_plant(conn, plant_id, photo_ids)
}

// Removes both the link rows and the owned photo rows.
// The deleted photos are returned for the file cleanup.
fn delete_photos_of_plant(conn: &mut SqliteConnection, plant_id: &Id) -> Result<Vec<Photo>> {
    let photos = photos_of_plant(conn, plant_id)?;
    {
        use schema::plant_photos::dsl;
        diesel::delete(dsl::plant_photos.filter(dsl::plant_id.eq(plant_id.as_str())))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    let photo_ids: Vec<_> = photos.iter().map(|photo| photo.id.as_str()).collect();
    {
        use schema::photos::dsl;
        diesel::delete(dsl::photos.filter(dsl::id.eq_any(&photo_ids)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(photos)
}
