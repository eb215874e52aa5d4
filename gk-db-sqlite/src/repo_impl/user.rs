use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn delete_user(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user(&self, id: &Id) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_user(&self, id: &Id) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = models::NewUser::from(u);
    let count = diesel::update(dsl::users.filter(dsl::id.eq(new_user.id)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_user(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(dsl::users.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
