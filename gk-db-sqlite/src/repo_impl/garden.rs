use super::*;

impl<'a> GardenRepo for DbReadOnly<'a> {
    fn create_garden(&self, _garden: &Garden) -> Result<()> {
        unreachable!();
    }
    fn update_garden(&self, _garden: &Garden) -> Result<()> {
        unreachable!();
    }
    fn delete_garden(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_garden(&self, id: &Id) -> Result<Garden> {
        get_garden(&mut self.conn.borrow_mut(), id)
    }
    fn all_gardens(&self) -> Result<Vec<Garden>> {
        all_gardens(&mut self.conn.borrow_mut())
    }

    fn create_plant_sighting(&self, _sighting: &PlantSighting) -> Result<()> {
        unreachable!();
    }
    fn sightings_of_garden(&self, garden_id: &Id) -> Result<Vec<(Photo, Plant)>> {
        sightings_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_sightings_of_garden(&self, _garden_id: &Id) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> GardenRepo for DbReadWrite<'a> {
    fn create_garden(&self, garden: &Garden) -> Result<()> {
        create_garden(&mut self.conn.borrow_mut(), garden)
    }
    fn update_garden(&self, garden: &Garden) -> Result<()> {
        update_garden(&mut self.conn.borrow_mut(), garden)
    }
    fn delete_garden(&self, id: &Id) -> Result<()> {
        delete_garden(&mut self.conn.borrow_mut(), id)
    }

    fn get_garden(&self, id: &Id) -> Result<Garden> {
        get_garden(&mut self.conn.borrow_mut(), id)
    }
    fn all_gardens(&self) -> Result<Vec<Garden>> {
        all_gardens(&mut self.conn.borrow_mut())
    }

    fn create_plant_sighting(&self, sighting: &PlantSighting) -> Result<()> {
        create_plant_sighting(&mut self.conn.borrow_mut(), sighting)
    }
    fn sightings_of_garden(&self, garden_id: &Id) -> Result<Vec<(Photo, Plant)>> {
        sightings_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_sightings_of_garden(&self, garden_id: &Id) -> Result<usize> {
        delete_sightings_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
}

impl<'a> GardenRepo for DbConnection<'a> {
    fn create_garden(&self, garden: &Garden) -> Result<()> {
        create_garden(&mut self.conn.borrow_mut(), garden)
    }
    fn update_garden(&self, garden: &Garden) -> Result<()> {
        update_garden(&mut self.conn.borrow_mut(), garden)
    }
    fn delete_garden(&self, id: &Id) -> Result<()> {
        delete_garden(&mut self.conn.borrow_mut(), id)
    }

    fn get_garden(&self, id: &Id) -> Result<Garden> {
        get_garden(&mut self.conn.borrow_mut(), id)
    }
    fn all_gardens(&self) -> Result<Vec<Garden>> {
        all_gardens(&mut self.conn.borrow_mut())
    }

    fn create_plant_sighting(&self, sighting: &PlantSighting) -> Result<()> {
        create_plant_sighting(&mut self.conn.borrow_mut(), sighting)
    }
    fn sightings_of_garden(&self, garden_id: &Id) -> Result<Vec<(Photo, Plant)>> {
        sightings_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_sightings_of_garden(&self, garden_id: &Id) -> Result<usize> {
        delete_sightings_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
}

fn create_garden(conn: &mut SqliteConnection, g: &Garden) -> Result<()> {
    let new_garden = models::NewGarden::from(g);
    diesel::insert_into(schema::gardens::table)
        .values(&new_garden)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_garden(conn: &mut SqliteConnection, g: &Garden) -> Result<()> {
    use schema::gardens::dsl;
    let new_garden = models::NewGarden::from(g);
    let count = diesel::update(dsl::gardens.filter(dsl::id.eq(new_garden.id)))
        .set(&new_garden)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_garden(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::gardens::dsl;
    let count = diesel::delete(dsl::gardens.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_garden(conn: &mut SqliteConnection, id: &Id) -> Result<Garden> {
    use schema::gardens::dsl;
    Ok(dsl::gardens
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::GardenEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_gardens(conn: &mut SqliteConnection) -> Result<Vec<Garden>> {
    use schema::gardens::dsl;
    Ok(dsl::gardens
        .load::<models::GardenEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn create_plant_sighting(conn: &mut SqliteConnection, sighting: &PlantSighting) -> Result<()> {
    let new_sighting = models::NewGardenPlantPhoto::from(sighting);
    diesel::insert_into(schema::garden_plant_photos::table)
        .values(&new_sighting)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn sightings_of_garden(
    conn: &mut SqliteConnection,
    garden_id: &Id,
) -> Result<Vec<(Photo, Plant)>> {
    use schema::{garden_plant_photos, photos, plants};
    Ok(garden_plant_photos::table
        .inner_join(photos::table)
        .inner_join(plants::table)
        .filter(garden_plant_photos::garden_id.eq(garden_id.as_str()))
        .select((photos::all_columns, plants::all_columns))
        .load::<(models::PhotoEntity, models::PlantEntity)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(photo, plant)| (photo.into(), plant.into()))
        .collect())
}

fn delete_sightings_of_garden(conn: &mut SqliteConnection, garden_id: &Id) -> Result<usize> {
    use schema::garden_plant_photos::dsl;
    diesel::delete(dsl::garden_plant_photos.filter(dsl::garden_id.eq(garden_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}
