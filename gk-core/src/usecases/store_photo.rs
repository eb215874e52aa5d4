use super::prelude::*;

pub fn create_photo<R: PhotoRepo>(repo: &R, url: String) -> Result<Photo> {
    if url.trim().is_empty() {
        return Err(Error::Url);
    }
    let photo = Photo {
        id: Id::new(),
        url,
    };
    repo.create_photo(&photo)?;
    Ok(photo)
}

pub fn update_photo<R: PhotoRepo>(repo: &R, id: &Id, url: String) -> Result<Photo> {
    if url.trim().is_empty() {
        return Err(Error::Url);
    }
    let photo = Photo {
        id: repo.get_photo(id)?.id,
        url,
    };
    repo.update_photo(&photo)?;
    Ok(photo)
}
