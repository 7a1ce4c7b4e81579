mod recursive_minimisation;
