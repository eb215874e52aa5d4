use super::*;

impl<'a> BotanistRepo for DbReadOnly<'a> {
    fn create_botanist(&self, _botanist: &Botanist) -> Result<()> {
        unreachable!();
    }
    fn update_botanist(&self, _botanist: &Botanist) -> Result<()> {
        unreachable!();
    }
    fn delete_botanist(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_botanist(&self, id: &Id) -> Result<(Botanist, User)> {
        get_botanist(&mut self.conn.borrow_mut(), id)
    }
    fn all_botanists(&self) -> Result<Vec<(Botanist, User)>> {
        all_botanists(&mut self.conn.borrow_mut())
    }
}

impl<'a> BotanistRepo for DbReadWrite<'a> {
    fn create_botanist(&self, botanist: &Botanist) -> Result<()> {
        create_botanist(&mut self.conn.borrow_mut(), botanist)
    }
    fn update_botanist(&self, botanist: &Botanist) -> Result<()> {
        update_botanist(&mut self.conn.borrow_mut(), botanist)
    }
    fn delete_botanist(&self, id: &Id) -> Result<()> {
        delete_botanist(&mut self.conn.borrow_mut(), id)
    }

    fn get_botanist(&self, id: &Id) -> Result<(Botanist, User)> {
        get_botanist(&mut self.conn.borrow_mut(), id)
    }
    fn all_botanists(&self) -> Result<Vec<(Botanist, User)>> {
        all_botanists(&mut self.conn.borrow_mut())
    }
}

impl<'a> BotanistRepo for DbConnection<'a> {
    fn create_botanist(&self, botanist: &Botanist) -> Result<()> {
        create_botanist(&mut self.conn.borrow_mut(), botanist)
    }
    fn update_botanist(&self, botanist: &Botanist) -> Result<()> {
        update_botanist(&mut self.conn.borrow_mut(), botanist)
    }
    fn delete_botanist(&self, id: &Id) -> Result<()> {
        delete_botanist(&mut self.conn.borrow_mut(), id)
    }

    fn get_botanist(&self, id: &Id) -> Result<(Botanist, User)> {
        get_botanist(&mut self.conn.borrow_mut(), id)
    }
    fn all_botanists(&self) -> Result<Vec<(Botanist, User)>> {
        all_botanists(&mut self.conn.borrow_mut())
    }
}

fn create_botanist(conn: &mut SqliteConnection, b: &Botanist) -> Result<()> {
    let new_botanist = models::NewBotanist::from(b);
    diesel::insert_into(schema::botanists::table)
        .values(&new_botanist)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_botanist(conn: &mut SqliteConnection, b: &Botanist) -> Result<()> {
    use schema::botanists::dsl;
    let new_botanist = models::NewBotanist::from(b);
    let count = diesel::update(dsl::botanists.filter(dsl::id.eq(new_botanist.id)))
        .set(&new_botanist)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_botanist(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::botanists::dsl;
    let count = diesel::delete(dsl::botanists.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_botanist(conn: &mut SqliteConnection, id: &Id) -> Result<(Botanist, User)> {
    use schema::{botanists, users};
    let (botanist, user) = botanists::table
        .inner_join(users::table)
        .filter(botanists::id.eq(id.as_str()))
        .first::<(models::BotanistEntity, models::UserEntity)>(conn)
        .map_err(from_diesel_err)?;
    Ok((botanist.into(), user.into()))
}

fn all_botanists(conn: &mut SqliteConnection) -> Result<Vec<(Botanist, User)>> {
    use schema::{botanists, users};
    Ok(botanists::table
        .inner_join(users::table)
        .load::<(models::BotanistEntity, models::UserEntity)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(botanist, user)| (botanist.into(), user.into()))
        .collect())
}
