use super::*;

impl<'a> PhotoRepo for DbReadOnly<'a> {
    fn create_photo(&self, _photo: &Photo) -> Result<()> {
        unreachable!();
    }
    fn update_photo(&self, _photo: &Photo) -> Result<()> {
        unreachable!();
    }
    fn delete_photo(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_photo(&self, id: &Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn all_photos(&self) -> Result<Vec<Photo>> {
        all_photos(&mut self.conn.borrow_mut())
    }
}

impl<'a> PhotoRepo for DbReadWrite<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn update_photo(&self, photo: &Photo) -> Result<()> {
        update_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: &Id) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }

    fn get_photo(&self, id: &Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn all_photos(&self) -> Result<Vec<Photo>> {
        all_photos(&mut self.conn.borrow_mut())
    }
}

impl<'a> PhotoRepo for DbConnection<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn update_photo(&self, photo: &Photo) -> Result<()> {
        update_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photo(&self, id: &Id) -> Result<()> {
        delete_photo(&mut self.conn.borrow_mut(), id)
    }

    fn get_photo(&self, id: &Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn all_photos(&self) -> Result<Vec<Photo>> {
        all_photos(&mut self.conn.borrow_mut())
    }
}

fn create_photo(conn: &mut SqliteConnection, p: &Photo) -> Result<()> {
    let new_photo = models::NewPhoto::from(p);
    diesel::insert_into(schema::photos::table)
        .values(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_photo(conn: &mut SqliteConnection, p: &Photo) -> Result<()> {
    use schema::photos::dsl;
    let new_photo = models::NewPhoto::from(p);
    let count = diesel::update(dsl::photos.filter(dsl::id.eq(new_photo.id)))
        .set(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_photo(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::photos::dsl;
    let count = diesel::delete(dsl::photos.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_photo(conn: &mut SqliteConnection, id: &Id) -> Result<Photo> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_photos(conn: &mut SqliteConnection) -> Result<Vec<Photo>> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
