mod bumping;
mod clause_activity;
mod first_uip;
