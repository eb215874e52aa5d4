use super::prelude::*;

#[derive(Debug, Clone)]
pub struct BotanistPayload {
    pub user_id: Id,
    pub siret: String,
}

pub fn create_botanist<R: BotanistRepo>(repo: &R, p: BotanistPayload) -> Result<Botanist> {
    let botanist = Botanist {
        id: Id::new(),
        user_id: p.user_id,
        siret: p.siret.parse::<Siret>()?,
    };
    repo.create_botanist(&botanist)?;
    Ok(botanist)
}

pub fn update_botanist<R: BotanistRepo>(repo: &R, id: &Id, p: BotanistPayload) -> Result<Botanist> {
    let (old, _) = repo.get_botanist(id)?;
    let botanist = Botanist {
        id: old.id,
        user_id: p.user_id,
        siret: p.siret.parse::<Siret>()?,
    };
    repo.update_botanist(&botanist)?;
    Ok(botanist)
}
