///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        firstname -> Text,
        lastname -> Text,
        email -> Text,
        password -> Text,
        picture_url -> Nullable<Text>,
        publishable -> Bool,
    }
}

table! {
    botanists (id) {
        id -> Text,
        user_id -> Text,
        siret -> Text,
    }
}

joinable!(botanists -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Gardens
///////////////////////////////////////////////////////////////////////

table! {
    gardens (id) {
        id -> Text,
        latitude -> Double,
        longitude -> Double,
        address -> Text,
        city -> Text,
        zipcode -> Text,
        owner_id -> Text,
        status -> Text,
        botanist_id -> Nullable<Text>,
    }
}

table! {
    messages (id) {
        id -> Text,
        user_id -> Text,
        garden_id -> Text,
        body -> Text,
        // unix timestamp in milliseconds
        created_at -> BigInt,
    }
}

joinable!(messages -> users (user_id));
joinable!(messages -> gardens (garden_id));

///////////////////////////////////////////////////////////////////////
// Plants, tags, photos
///////////////////////////////////////////////////////////////////////

table! {
    plants (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        // JSON object with care attributes
        hint -> Text,
        fullname -> Text,
        picture_url -> Nullable<Text>,
    }
}

table! {
    tags (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    photos (id) {
        id -> Text,
        url -> Text,
    }
}

table! {
    plant_tags (plant_id, tag_id) {
        plant_id -> Text,
        tag_id -> Text,
    }
}

joinable!(plant_tags -> plants (plant_id));
joinable!(plant_tags -> tags (tag_id));

table! {
    plant_photos (plant_id, photo_id) {
        plant_id -> Text,
        photo_id -> Text,
    }
}

joinable!(plant_photos -> plants (plant_id));
joinable!(plant_photos -> photos (photo_id));

table! {
    garden_plant_photos (garden_id, plant_id, photo_id) {
        garden_id -> Text,
        plant_id -> Text,
        photo_id -> Text,
    }
}

joinable!(garden_plant_photos -> gardens (garden_id));
joinable!(garden_plant_photos -> plants (plant_id));
joinable!(garden_plant_photos -> photos (photo_id));

allow_tables_to_appear_in_same_query!(
    users,
    botanists,
    gardens,
    messages,
    plants,
    tags,
    photos,
    plant_tags,
    plant_photos,
    garden_plant_photos,
);
