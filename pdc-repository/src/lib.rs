//! In-memory storage engine for the catalogue service.

use pdc_core::Engine;

mod catalogues;
mod customer_types;
mod groups;
mod offers;
mod products;
pub mod seed;
mod store;
mod suppliers;
mod taxes;

pub use store::MemoryStore;

impl Engine for MemoryStore {
    type Suppliers = MemoryStore;
    type Catalogues = MemoryStore;
    type Groups = MemoryStore;
    type Products = MemoryStore;
    type Offers = MemoryStore;
    type Taxes = MemoryStore;
    type CustomerTypes = MemoryStore;

    fn suppliers(&self) -> Self::Suppliers {
        self.clone()
    }

    fn catalogues(&self) -> Self::Catalogues {
        self.clone()
    }

    fn groups(&self) -> Self::Groups {
        self.clone()
    }

    fn products(&self) -> Self::Products {
        self.clone()
    }

    fn offers(&self) -> Self::Offers {
        self.clone()
    }

    fn taxes(&self) -> Self::Taxes {
        self.clone()
    }

    fn customer_types(&self) -> Self::CustomerTypes {
        self.clone()
    }
}
