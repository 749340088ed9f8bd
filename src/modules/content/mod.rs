//! Sample content routes, one per gate combination.
//!
//! | Route | Gates |
//! |-------|-------|
//! | `GET /api/test/all` | none |
//! | `GET /api/test/user` | token |
//! | `GET /api/test/student` | token, student |
//! | `GET /api/test/professor` | token, professor |
//! | `GET /api/test/staff` | token, professor or admin |
//! | `GET /api/test/admin` | token, admin |

pub mod controller;
pub mod router;
