mod opm;
