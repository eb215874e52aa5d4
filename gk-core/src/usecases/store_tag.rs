use super::prelude::*;

pub fn create_tag<R: TagRepo>(repo: &R, name: String) -> Result<Tag> {
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let tag = Tag {
        id: Id::new(),
        name,
    };
    repo.create_tag(&tag)?;
    Ok(tag)
}

pub fn update_tag<R: TagRepo>(repo: &R, id: &Id, name: String) -> Result<Tag> {
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let tag = Tag {
        id: repo.get_tag(id)?.id,
        name,
    };
    repo.update_tag(&tag)?;
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    #[test]
    fn reject_missing_name() {
        let db = MockDb::default();
        assert!(matches!(create_tag(&db, "".into()), Err(Error::Name)));
        assert!(matches!(create_tag(&db, "  ".into()), Err(Error::Name)));
        assert!(create_tag(&db, "edible".into()).is_ok());
    }
}
