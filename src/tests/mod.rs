mod conflict_analysis;
mod minimisation;
