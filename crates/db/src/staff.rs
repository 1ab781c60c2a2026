//! Store staff member.
//!
//! Staff members process rentals and accept payments, and one of them manages
//! each store. A staff member may have a profile picture, stored as raw bytes;
//! [`Model::picture_base64`] exposes it as a base64 string suitable for
//! text-only transports, and [`decode_picture`] converts such a string back.

use base64::{engine::general_purpose::STANDARD, Engine};
use derive_more::{Display, Error, From};
use sea_orm::{entity::prelude::*, ActiveValue};

/// Staff member model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    /// Unique staff member identifier.
    #[sea_orm(primary_key)]
    pub staff_id: i32,

    #[sea_orm(column_type = "String(Some(45))")]
    pub first_name: String,

    #[sea_orm(column_type = "String(Some(45))")]
    pub last_name: String,

    /// Related address identifier.
    pub address_id: i32,

    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub email: Option<String>,

    /// Store identifier.
    ///
    /// This is a plain value rather than a foreign key.
    pub store_id: i32,

    /// Whether the staff member is still employed, `true` by default.
    pub active: bool,

    #[sea_orm(column_type = "String(Some(16))")]
    pub username: String,

    /// Password hash.
    #[sea_orm(column_type = "String(Some(40))", nullable)]
    pub password: Option<String>,

    pub last_update: TimeDateTime,

    /// Raw profile picture bytes.
    pub picture: Option<Vec<u8>>,
}

impl Model {
    /// Profile picture encoded with standard, padded base64.
    ///
    /// Returns [`None`] if there is no picture or the stored picture is empty.
    ///
    /// ## Example
    ///
    /// ```
    /// # use db::{staff, PrimitiveDateTime};
    /// # let model = |picture| staff::Model {
    /// #     staff_id: 1,
    /// #     first_name: String::from("Mike"),
    /// #     last_name: String::from("Hillyer"),
    /// #     address_id: 3,
    /// #     email: None,
    /// #     store_id: 1,
    /// #     active: true,
    /// #     username: String::from("Mike"),
    /// #     password: None,
    /// #     last_update: PrimitiveDateTime::MIN,
    /// #     picture,
    /// # };
    /// assert_eq!(model(Some(b"hello".to_vec())).picture_base64().as_deref(), Some("aGVsbG8="));
    /// assert_eq!(model(Some(Vec::new())).picture_base64(), None);
    /// assert_eq!(model(None).picture_base64(), None);
    /// ```
    pub fn picture_base64(&self) -> Option<String> {
        self.picture
            .as_deref()
            .filter(|picture| !picture.is_empty())
            .map(|picture| STANDARD.encode(picture))
    }
}

/// Errors that may occur while decoding a base64-encoded picture.
#[derive(Debug, Display, From, Error)]
pub enum PictureDecodeError {
    /// Picture string is not valid base64.
    #[display(fmt = "invalid base64 picture: {}", _0)]
    InvalidBase64(base64::DecodeError),
}

/// Decode a picture previously produced by [`Model::picture_base64`].
///
/// An empty string decodes to [`None`], mirroring how empty pictures are encoded.
pub fn decode_picture(encoded: &str) -> Result<Option<Vec<u8>>, PictureDecodeError> {
    if encoded.is_empty() {
        return Ok(None);
    }

    Ok(Some(STANDARD.decode(encoded)?))
}

/// Staff member model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::AddressId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Address,

    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,

    #[sea_orm(has_many = "super::rental::Entity")]
    Rentals,

    #[sea_orm(has_many = "super::store::Entity")]
    ManagedStores,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentals.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManagedStores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            active: ActiveValue::Set(true),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}
