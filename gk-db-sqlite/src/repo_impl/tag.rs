use super::*;

impl<'a> TagRepo for DbReadOnly<'a> {
    fn create_tag(&self, _tag: &Tag) -> Result<()> {
        unreachable!();
    }
    fn update_tag(&self, _tag: &Tag) -> Result<()> {
        unreachable!();
    }
    fn delete_tag(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_tag(&self, id: &Id) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

impl<'a> TagRepo for DbReadWrite<'a> {
    fn create_tag(&self, tag: &Tag) -> Result<()> {
        create_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn update_tag(&self, tag: &Tag) -> Result<()> {
        update_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn delete_tag(&self, id: &Id) -> Result<()> {
        delete_tag(&mut self.conn.borrow_mut(), id)
    }

    fn get_tag(&self, id: &Id) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

impl<'a> TagRepo for DbConnection<'a> {
    fn create_tag(&self, tag: &Tag) -> Result<()> {
        create_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn update_tag(&self, tag: &Tag) -> Result<()> {
        update_tag(&mut self.conn.borrow_mut(), tag)
    }
    fn delete_tag(&self, id: &Id) -> Result<()> {
        delete_tag(&mut self.conn.borrow_mut(), id)
    }

    fn get_tag(&self, id: &Id) -> Result<Tag> {
        get_tag(&mut self.conn.borrow_mut(), id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

fn create_tag(conn: &mut SqliteConnection, t: &Tag) -> Result<()> {
    let new_tag = models::NewTag::from(t);
    diesel::insert_into(schema::tags::table)
        .values(&new_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_tag(conn: &mut SqliteConnection, t: &Tag) -> Result<()> {
    use schema::tags::dsl;
    let new_tag = models::NewTag::from(t);
    let count = diesel::update(dsl::tags.filter(dsl::id.eq(new_tag.id)))
        .set(&new_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_tag(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::tags::dsl;
    let count = diesel::delete(dsl::tags.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_tag(conn: &mut SqliteConnection, id: &Id) -> Result<Tag> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
