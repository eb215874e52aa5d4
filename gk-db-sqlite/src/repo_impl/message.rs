use super::*;

impl<'a> MessageRepo for DbReadOnly<'a> {
    fn create_message(&self, _message: &Message) -> Result<()> {
        unreachable!();
    }
    fn update_message(&self, _message: &Message) -> Result<()> {
        unreachable!();
    }
    fn delete_message(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_message(&self, id: &Id) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn all_messages(&self) -> Result<Vec<Message>> {
        all_messages(&mut self.conn.borrow_mut())
    }
    fn messages_of_garden(&self, garden_id: &Id) -> Result<Vec<Message>> {
        messages_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_messages_of_garden(&self, _garden_id: &Id) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> MessageRepo for DbReadWrite<'a> {
    fn create_message(&self, message: &Message) -> Result<()> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn update_message(&self, message: &Message) -> Result<()> {
        update_message(&mut self.conn.borrow_mut(), message)
    }
    fn delete_message(&self, id: &Id) -> Result<()> {
        delete_message(&mut self.conn.borrow_mut(), id)
    }

    fn get_message(&self, id: &Id) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn all_messages(&self) -> Result<Vec<Message>> {
        all_messages(&mut self.conn.borrow_mut())
    }
    fn messages_of_garden(&self, garden_id: &Id) -> Result<Vec<Message>> {
        messages_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_messages_of_garden(&self, garden_id: &Id) -> Result<usize> {
        delete_messages_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
}

impl<'a> MessageRepo for DbConnection<'a> {
    fn create_message(&self, message: &Message) -> Result<()> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn update_message(&self, message: &Message) -> Result<()> {
        update_message(&mut self.conn.borrow_mut(), message)
    }
    fn delete_message(&self, id: &Id) -> Result<()> {
        delete_message(&mut self.conn.borrow_mut(), id)
    }

    fn get_message(&self, id: &Id) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn all_messages(&self) -> Result<Vec<Message>> {
        all_messages(&mut self.conn.borrow_mut())
    }
    fn messages_of_garden(&self, garden_id: &Id) -> Result<Vec<Message>> {
        messages_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
    fn delete_messages_of_garden(&self, garden_id: &Id) -> Result<usize> {
        delete_messages_of_garden(&mut self.conn.borrow_mut(), garden_id)
    }
}

fn create_message(conn: &mut SqliteConnection, m: &Message) -> Result<()> {
    let new_message = models::NewMessage::from(m);
    diesel::insert_into(schema::messages::table)
        .values(&new_message)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_message(conn: &mut SqliteConnection, m: &Message) -> Result<()> {
    use schema::messages::dsl;
    let new_message = models::NewMessage::from(m);
    let count = diesel::update(dsl::messages.filter(dsl::id.eq(new_message.id)))
        .set(&new_message)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_message(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::messages::dsl;
    let count = diesel::delete(dsl::messages.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_message(conn: &mut SqliteConnection, id: &Id) -> Result<Message> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_messages(conn: &mut SqliteConnection) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .order_by(dsl::created_at)
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn messages_of_garden(conn: &mut SqliteConnection, garden_id: &Id) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .filter(dsl::garden_id.eq(garden_id.as_str()))
        .order_by(dsl::created_at)
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn delete_messages_of_garden(conn: &mut SqliteConnection, garden_id: &Id) -> Result<usize> {
    use schema::messages::dsl;
    diesel::delete(dsl::messages.filter(dsl::garden_id.eq(garden_id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)
}
